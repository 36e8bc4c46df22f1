//! A minimal NBT reader, used to check that encoded documents decode back to themselves.

use anyhow::{anyhow, Result};
use nbt_types::{Compound, NamedTag, Tag, TagList, TagType};
use std::io::{Cursor, Read};

/// Reads one document from `r`, and returns it along with the number of bytes it took.
pub fn read_doc<R: Read>(r: &mut R) -> Result<(usize, NamedTag)> {
    let mut r_len = 0;
    let tag_type = read_tag_type(r, &mut r_len)?;
    if tag_type == TagType::End {
        return Err(anyhow!("End where a root tag is expected."));
    }
    let name = read_str(r, &mut r_len)?;
    let tag = read_payload(r, tag_type, &mut r_len)?;
    Ok((r_len, NamedTag { name, tag }))
}

/// Reads exactly one document from `buf`, rejecting trailing bytes.
pub fn read_doc_solo(buf: &[u8]) -> Result<NamedTag> {
    let mut r = Cursor::new(buf);
    let (r_len, doc) = read_doc(&mut r)?;
    if r_len != buf.len() {
        return Err(anyhow!("{} trailing bytes.", buf.len() - r_len));
    }
    Ok(doc)
}

fn read_array<const N: usize, R: Read>(r: &mut R, r_len: &mut usize) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    r.read_exact(&mut buf)?;
    *r_len += N;
    Ok(buf)
}

fn read_tag_type<R: Read>(r: &mut R, r_len: &mut usize) -> Result<TagType> {
    let [int] = read_array::<1, _>(r, r_len)?;
    Ok(TagType::try_from(int)?)
}

fn read_count<R: Read>(r: &mut R, r_len: &mut usize) -> Result<usize> {
    let ct = u32::from_be_bytes(read_array(r, r_len)?);
    Ok(ct as usize)
}

fn read_str<R: Read>(r: &mut R, r_len: &mut usize) -> Result<String> {
    let len = u16::from_be_bytes(read_array(r, r_len)?) as usize;
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    *r_len += len;
    Ok(String::from_utf8(buf)?)
}

fn read_vec<const N: usize, T, R: Read>(
    r: &mut R,
    r_len: &mut usize,
    from_be: fn([u8; N]) -> T,
) -> Result<Vec<T>> {
    let ct = read_count(r, r_len)?;
    let mut elems = Vec::with_capacity(ct);
    for _ in 0..ct {
        elems.push(from_be(read_array(r, r_len)?));
    }
    Ok(elems)
}

fn read_payload<R: Read>(r: &mut R, tag_type: TagType, r_len: &mut usize) -> Result<Tag> {
    let tag = match tag_type {
        TagType::End => return Err(anyhow!("End has no payload.")),
        TagType::Byte => Tag::Byte(i8::from_be_bytes(read_array(r, r_len)?)),
        TagType::Short => Tag::Short(i16::from_be_bytes(read_array(r, r_len)?)),
        TagType::Int => Tag::Int(i32::from_be_bytes(read_array(r, r_len)?)),
        TagType::Long => Tag::Long(i64::from_be_bytes(read_array(r, r_len)?)),
        TagType::Float => Tag::Float(f32::from_be_bytes(read_array(r, r_len)?)),
        TagType::Double => Tag::Double(f64::from_be_bytes(read_array(r, r_len)?)),
        TagType::ByteArray => Tag::ByteArray(read_vec(r, r_len, i8::from_be_bytes)?),
        TagType::IntArray => Tag::IntArray(read_vec(r, r_len, i32::from_be_bytes)?),
        TagType::LongArray => Tag::LongArray(read_vec(r, r_len, i64::from_be_bytes)?),
        TagType::String => Tag::String(read_str(r, r_len)?),
        TagType::List => {
            let elem_type = read_tag_type(r, r_len)?;
            let ct = read_count(r, r_len)?;
            let mut list = TagList::empty(elem_type);
            for _ in 0..ct {
                list.push(read_payload(r, elem_type, r_len)?)?;
            }
            Tag::List(list)
        }
        TagType::Compound => {
            let mut compound = Compound::new();
            loop {
                let child_type = read_tag_type(r, r_len)?;
                if child_type == TagType::End {
                    break;
                }
                let child_name = read_str(r, r_len)?;
                let child = read_payload(r, child_type, r_len)?;
                compound.push(child_name, child);
            }
            Tag::Compound(compound)
        }
    };
    Ok(tag)
}
