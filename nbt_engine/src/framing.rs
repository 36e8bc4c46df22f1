use nbt_types::{NbtError, NbtResult, TagType};

#[derive(Debug)]
enum Frame {
    Compound,
    List { elem_type: TagType, remaining: u32 },
}

/// Open compounds and lists of a sink, innermost last.
///
/// Sinks consult this before emitting anything, so an event sequence that does
/// not describe a single well-formed document is refused as structural misuse
/// instead of turning into corrupt bytes.
#[derive(Default, Debug)]
pub struct Framing {
    frames: Vec<Frame>,
    root_seen: bool,
}

impl Framing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits the next field. Call before writing any of its bytes.
    pub fn enter(&mut self, named: bool, tag_type: TagType) -> NbtResult<()> {
        match self.frames.last_mut() {
            None => {
                if self.root_seen {
                    return Err(NbtError::misuse("document already has a root tag"));
                }
                if !named {
                    return Err(NbtError::misuse("root tag must be named"));
                }
                self.root_seen = true;
            }
            Some(Frame::Compound) => {
                if !named {
                    return Err(NbtError::misuse(format!(
                        "unnamed {tag_type} inside a compound"
                    )));
                }
            }
            Some(Frame::List {
                elem_type,
                remaining,
            }) => {
                if named {
                    return Err(NbtError::misuse(format!(
                        "named {tag_type} inside a list"
                    )));
                }
                if tag_type != *elem_type {
                    return Err(NbtError::misuse(format!(
                        "{tag_type} inside a list of {elem_type}"
                    )));
                }
                if *remaining == 0 {
                    return Err(NbtError::misuse("more list elements than declared"));
                }
                *remaining -= 1;
            }
        }
        Ok(())
    }

    pub fn open_compound(&mut self) {
        self.frames.push(Frame::Compound);
    }

    pub fn open_list(&mut self, elem_type: TagType, len: u32) {
        self.frames.push(Frame::List {
            elem_type,
            remaining: len,
        });
    }

    pub fn close_compound(&mut self) -> NbtResult<()> {
        match self.frames.last() {
            Some(Frame::Compound) => {
                self.frames.pop();
                Ok(())
            }
            Some(Frame::List { .. }) => Err(NbtError::misuse("compound end inside a list")),
            None => Err(NbtError::misuse("compound end without an open compound")),
        }
    }

    pub fn close_list(&mut self) -> NbtResult<()> {
        match self.frames.last() {
            Some(Frame::List { remaining: 0, .. }) => {
                self.frames.pop();
                Ok(())
            }
            Some(Frame::List { remaining, .. }) => Err(NbtError::misuse(format!(
                "list ended with {remaining} declared elements missing"
            ))),
            Some(Frame::Compound) => Err(NbtError::misuse("list end inside a compound")),
            None => Err(NbtError::misuse("list end without an open list")),
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Whether a root was written and every frame it opened is closed.
    pub fn is_complete(&self) -> bool {
        self.root_seen && self.frames.is_empty()
    }
}
