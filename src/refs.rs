use pdf_writer::Ref;
use std::collections::HashMap;

/// The objects of a guide sheet PDF
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    Info,
    PageTree,
    Page,
    ContentForPage,
    CaptionFont,
}

/// Hands out one object id per [RefType], numbered from 1 in the order they are asked for
pub struct ObjectReferences {
    refs: HashMap<RefType, Ref>,
    next_id: i32,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences {
            refs: HashMap::new(),
            next_id: 1,
        }
    }

    /// The id of `ref_type`, allocated on first use
    pub fn gen(&mut self, ref_type: RefType) -> Ref {
        let next_id = &mut self.next_id;
        *self.refs.entry(ref_type).or_insert_with(|| {
            let id = Ref::new(*next_id);
            *next_id += 1;
            id
        })
    }
}
