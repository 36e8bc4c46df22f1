use nbt_types::{Compound, NamedTag, Tag, TagList, TagType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHABET: [char; 8] = ['a', 'z', 'Q', '0', '_', ' ', 'é', '雪'];

const ALL_TYPES: [TagType; 12] = [
    TagType::Byte,
    TagType::Short,
    TagType::Int,
    TagType::Long,
    TagType::Float,
    TagType::Double,
    TagType::ByteArray,
    TagType::String,
    TagType::List,
    TagType::Compound,
    TagType::IntArray,
    TagType::LongArray,
];

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn gen_str(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(0..12);
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

fn gen_len(rng: &mut impl Rng) -> usize {
    rng.gen_range(0..6)
}

/// A random tag type. Nesting types only while `depth` remains.
pub fn gen_tag_type(rng: &mut impl Rng, depth: usize) -> TagType {
    loop {
        let tag_type = ALL_TYPES[rng.gen_range(0..ALL_TYPES.len())];
        if depth > 0 || !matches!(tag_type, TagType::List | TagType::Compound) {
            return tag_type;
        }
    }
}

/// A random tag of `tag_type`. Floats are drawn from `[0, 1)`, so never NaN.
pub fn gen_tag(rng: &mut impl Rng, tag_type: TagType, depth: usize) -> Tag {
    match tag_type {
        TagType::End => Tag::End,
        TagType::Byte => Tag::Byte(rng.gen()),
        TagType::Short => Tag::Short(rng.gen()),
        TagType::Int => Tag::Int(rng.gen()),
        TagType::Long => Tag::Long(rng.gen()),
        TagType::Float => Tag::Float(rng.gen()),
        TagType::Double => Tag::Double(rng.gen()),
        TagType::ByteArray => Tag::ByteArray((0..gen_len(rng)).map(|_| rng.gen()).collect()),
        TagType::IntArray => Tag::IntArray((0..gen_len(rng)).map(|_| rng.gen()).collect()),
        TagType::LongArray => Tag::LongArray((0..gen_len(rng)).map(|_| rng.gen()).collect()),
        TagType::String => Tag::String(gen_str(rng)),
        TagType::List => Tag::List(gen_list(rng, depth)),
        TagType::Compound => Tag::Compound(gen_compound(rng, depth)),
    }
}

pub fn gen_list(rng: &mut impl Rng, depth: usize) -> TagList {
    let elem_type = gen_tag_type(rng, depth.saturating_sub(1));
    let mut list = TagList::empty(elem_type);
    for _ in 0..gen_len(rng) {
        let elem = gen_tag(rng, elem_type, depth.saturating_sub(1));
        list.push(elem).expect("elements share the list's type");
    }
    list
}

pub fn gen_compound(rng: &mut impl Rng, depth: usize) -> Compound {
    (0..gen_len(rng))
        .map(|_| {
            let tag_type = gen_tag_type(rng, depth.saturating_sub(1));
            (gen_str(rng), gen_tag(rng, tag_type, depth.saturating_sub(1)))
        })
        .collect()
}

pub fn gen_doc(rng: &mut impl Rng, depth: usize) -> NamedTag {
    NamedTag::new(gen_str(rng), gen_compound(rng, depth))
}
