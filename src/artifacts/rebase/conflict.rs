use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use derive_new::new;

/// Textual artifact showing two diverging contents side by side
///
/// ```text
/// <<<<<<< <hash 1>
/// <content 1>
/// =======
/// <content 2>
/// >>>>>> <hash 2>
/// ```
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ConflictMarker {
    ours: ObjectId,
    ours_content: Bytes,
    theirs: ObjectId,
    theirs_content: Bytes,
}

impl ConflictMarker {
    pub fn render(&self) -> Vec<u8> {
        let mut rendered = format!("<<<<<<< {}\n", self.ours).into_bytes();
        rendered.extend_from_slice(&self.ours_content);
        rendered.extend_from_slice(b"\n=======\n");
        rendered.extend_from_slice(&self.theirs_content);
        rendered.extend_from_slice(format!("\n>>>>>> {}\n", self.theirs).as_bytes());
        rendered
    }
}
