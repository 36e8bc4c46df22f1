use nbt_types::{NamedTag, Tag};

const TAG_TYPE: usize = 1;
const STR_LEN: usize = 2;
const COUNT: usize = 4;

/// Encoded size of `doc`, summed field by field from the wire table.
pub fn doc_len(doc: &NamedTag) -> usize {
    TAG_TYPE + STR_LEN + doc.name.len() + payload_len(&doc.tag)
}

pub fn payload_len(tag: &Tag) -> usize {
    match tag {
        Tag::End => 0,
        Tag::Byte(_) => 1,
        Tag::Short(_) => 2,
        Tag::Int(_) | Tag::Float(_) => 4,
        Tag::Long(_) | Tag::Double(_) => 8,
        Tag::ByteArray(a) => COUNT + a.len(),
        Tag::IntArray(a) => COUNT + 4 * a.len(),
        Tag::LongArray(a) => COUNT + 8 * a.len(),
        Tag::String(s) => STR_LEN + s.len(),
        Tag::List(l) => TAG_TYPE + COUNT + l.iter().map(payload_len).sum::<usize>(),
        Tag::Compound(c) => {
            let children = c
                .iter()
                .map(|(name, child)| TAG_TYPE + STR_LEN + name.len() + payload_len(child))
                .sum::<usize>();
            children + TAG_TYPE
        }
    }
}
