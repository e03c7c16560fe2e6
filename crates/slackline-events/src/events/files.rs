//! File and file-comment lifecycle events.
//!
//! Most of these carry a full [`File`] record; deletion events carry
//! only the bare identifier, since the object is already gone.

use serde::{Deserialize, Serialize};

use crate::ids::{ChannelId, CommentId, FileId, UserId};
use crate::objects::{Comment, File};
use crate::ts::Timestamp;

/// `file_created`: a file was uploaded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCreatedEvent {
    /// Discriminator echo: `"file_created"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The new file.
    pub file: File,
    /// Uploading user.
    pub user_id: UserId,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `file_shared`: a file was shared into a conversation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSharedEvent {
    /// Discriminator echo: `"file_shared"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The shared file.
    pub file: File,
    /// Identifier duplicate delivered alongside the record.
    pub file_id: FileId,
    /// Sharing user.
    pub user_id: UserId,
    /// Conversation shared into.
    pub channel_id: ChannelId,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `file_unshared`: a file was unshared from a conversation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUnsharedEvent {
    /// Discriminator echo: `"file_unshared"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The unshared file.
    pub file: File,
}

/// `file_public`: a file became public.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePublicEvent {
    /// Discriminator echo: `"file_public"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The now-public file.
    pub file: File,
}

/// `file_private`: a file was made private again. Only the identifier
/// is delivered.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePrivateEvent {
    /// Discriminator echo: `"file_private"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The affected file.
    pub file: FileId,
}

/// `file_change`: a file's metadata changed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChangeEvent {
    /// Discriminator echo: `"file_change"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The changed file.
    pub file: File,
}

/// `file_deleted`: a file was deleted. Only the identifier remains.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDeletedEvent {
    /// Discriminator echo: `"file_deleted"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The deleted file.
    pub file_id: FileId,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `file_comment_added`: a comment was added to a file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCommentAddedEvent {
    /// Discriminator echo: `"file_comment_added"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The commented file.
    pub file: File,
    /// The new comment.
    pub comment: Comment,
}

/// `file_comment_edited`: a comment on a file was edited.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCommentEditedEvent {
    /// Discriminator echo: `"file_comment_edited"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The commented file.
    pub file: File,
    /// The comment after the edit.
    pub comment: Comment,
}

/// `file_comment_deleted`: a comment was removed. Only its identifier
/// is delivered.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCommentDeletedEvent {
    /// Discriminator echo: `"file_comment_deleted"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The file the comment was on.
    pub file: File,
    /// The deleted comment.
    pub comment: CommentId,
}
