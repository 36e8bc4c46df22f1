use super::helpers::gen::{gen_doc, rng};
use super::helpers::recording::{Event, OwnedArray, RecordingSink};
use anyhow::Result;
use nbt_engine::{serialize, to_bytes, ArrayRef, LenSink, Scalar, Sink, StreamSink};
use nbt_types::validation::{BoundedStr, ElemCount};
use nbt_types::{Compound, NamedTag, Tag, TagList, TagType};

fn name(s: &str) -> Option<String> {
    Some(String::from(s))
}

#[test]
fn events_follow_document_order() -> Result<()> {
    let points = TagList::new(
        TagType::Compound,
        vec![
            Tag::Compound(Compound::new().with("x", 1i16)),
            Tag::Compound(Compound::new()),
        ],
    )?;
    let doc = NamedTag::new(
        "root",
        Compound::new()
            .with("points", points)
            .with("ids", vec![1i64, 2])
            .with("label", "p"),
    );

    let mut sink = RecordingSink::default();
    serialize(&doc, &mut sink)?;

    let expected = vec![
        Event::BeginCompound(name("root")),
        Event::BeginList(name("points"), TagType::Compound, 2),
        Event::BeginCompound(None),
        Event::Scalar(name("x"), Scalar::Short(1)),
        Event::EndCompound,
        Event::BeginCompound(None),
        Event::EndCompound,
        Event::EndList,
        Event::Array(name("ids"), OwnedArray::Long(vec![1, 2])),
        Event::Str(name("label"), String::from("p")),
        Event::EndCompound,
    ];
    assert_eq!(sink.events, expected);
    Ok(())
}

#[test]
fn recorded_events_replay_to_same_bytes() -> Result<()> {
    let mut rng = rng(7);
    for _ in 0..50 {
        let doc = gen_doc(&mut rng, 3);
        let mut sink = RecordingSink::default();
        serialize(&doc, &mut sink)?;

        // The stream sink's framing rejects any misplaced name while replaying.
        let mut replay = StreamSink::new(vec![]);
        for event in &sink.events {
            replay_event(&mut replay, event)?;
        }
        assert_eq!(replay.finish()?, to_bytes(&doc)?);
    }
    Ok(())
}

fn bounded(n: &Option<String>) -> Result<Option<BoundedStr<'_>>> {
    Ok(match n {
        Some(n) => Some(BoundedStr::new(n)?),
        None => None,
    })
}

fn replay_event(sink: &mut impl Sink, event: &Event) -> Result<()> {
    match event {
        Event::BeginCompound(n) => sink.begin_compound(bounded(n)?)?,
        Event::EndCompound => sink.end_compound()?,
        Event::BeginList(n, elem_type, len) => {
            sink.begin_list(bounded(n)?, *elem_type, ElemCount::from(*len))?
        }
        Event::EndList => sink.end_list()?,
        Event::Scalar(n, scalar) => sink.write_scalar(bounded(n)?, *scalar)?,
        Event::Str(n, s) => sink.write_string(bounded(n)?, BoundedStr::new(s)?)?,
        Event::Array(n, array) => {
            let array = array.as_array_ref();
            let len = match array {
                ArrayRef::Byte(a) => ElemCount::of(a)?,
                ArrayRef::Int(a) => ElemCount::of(a)?,
                ArrayRef::Long(a) => ElemCount::of(a)?,
            };
            sink.write_array(bounded(n)?, array, len)?
        }
    }
    Ok(())
}

#[test]
fn works_through_dyn_sink() -> Result<()> {
    let doc = NamedTag::new("", Compound::new().with("a", 1i8).with("b", "c"));

    let mut stream = StreamSink::new(vec![]);
    let mut len = LenSink::new();
    for sink in [&mut stream as &mut dyn Sink, &mut len as &mut dyn Sink] {
        serialize(&doc, sink)?;
    }

    assert_eq!(len.finish()?, 16);
    assert_eq!(stream.finish()?.len(), 16);
    Ok(())
}
