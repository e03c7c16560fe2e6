//! The event registration table.
//!
//! One `define_events!` invocation is the single source of truth for
//! the wire vocabulary: the [`Event`] enum, the wire-string tables,
//! and the dispatch functions are all generated from it. Adding a
//! platform event means adding its payload record and one line here.

use super::apps::{AppHomeOpenedEvent, AppMentionEvent, AppRateLimitedEvent, AppUninstalledEvent};
use super::channels::{
    ChannelArchiveEvent, ChannelCreatedEvent, ChannelDeletedEvent, ChannelJoinedEvent,
    ChannelLeftEvent, ChannelRenameEvent, ChannelUnarchiveEvent, HistoryChangedEvent, MarkedEvent,
    MemberJoinedChannelEvent, MemberLeftChannelEvent,
};
use super::dnd::DndUpdatedEvent;
use super::files::{
    FileChangeEvent, FileCommentAddedEvent, FileCommentDeletedEvent, FileCommentEditedEvent,
    FileCreatedEvent, FileDeletedEvent, FilePrivateEvent, FilePublicEvent, FileSharedEvent,
    FileUnsharedEvent,
};
use super::groups::{
    GroupArchiveEvent, GroupCloseEvent, GroupJoinedEvent, GroupLeftEvent, GroupOpenEvent,
    GroupRenameEvent, GroupUnarchiveEvent,
};
use super::im::{ImCloseEvent, ImCreatedEvent, ImOpenEvent};
use super::message::{
    ArchiveMessageEvent, BotMessageEvent, FileCommentMessageEvent, FileMentionMessageEvent,
    FileShareMessageEvent, JoinMessageEvent, LeaveMessageEvent, MeMessageEvent,
    MessageChangedEvent, MessageDeletedEvent, MessageEvent, MessageRepliedEvent, NameMessageEvent,
    PinnedItemMessageEvent, PurposeMessageEvent, ThreadBroadcastEvent, TopicMessageEvent,
    UnarchiveMessageEvent,
};
use super::misc::{
    AccountsChangedEvent, BotAddedEvent, BotChangedEvent, CommandsChangedEvent,
    DesktopNotificationEvent, EmojiChangedEvent, HelloEvent, MobileInAppNotificationEvent,
    PongEvent, PrefChangeEvent, ReconnectUrlEvent,
};
use super::reactions::{ReactionAddedEvent, ReactionRemovedEvent};
use super::stars::{PinAddedEvent, PinRemovedEvent, StarAddedEvent, StarRemovedEvent};
use super::subteams::{
    SubteamCreatedEvent, SubteamMembersChangedEvent, SubteamSelfAddedEvent,
    SubteamSelfRemovedEvent, SubteamUpdatedEvent,
};
use super::team::{
    EmailDomainChangedEvent, TeamDomainChangeEvent, TeamMigrationStartedEvent, TeamPlanChangeEvent,
    TeamPrefChangeEvent, TeamProfileChangeEvent, TeamRenameEvent,
};
use super::users::{PresenceChangeEvent, TeamJoinEvent, UserChangeEvent, UserTypingEvent};

define_events! {
    events {
        /// `hello`
        Hello => "hello" => HelloEvent,
        /// `pong`
        Pong => "pong" => PongEvent,
        /// `reconnect_url`
        ReconnectUrl => "reconnect_url" => ReconnectUrlEvent,
        /// `accounts_changed`
        AccountsChanged => "accounts_changed" => AccountsChangedEvent,
        /// `commands_changed`
        CommandsChanged => "commands_changed" => CommandsChangedEvent,
        /// `emoji_changed`
        EmojiChanged => "emoji_changed" => EmojiChangedEvent,
        /// `manual_presence_change`
        ManualPresenceChange => "manual_presence_change" => PresenceChangeEvent,
        /// `presence_change`
        PresenceChange => "presence_change" => PresenceChangeEvent,
        /// `pref_change`
        PrefChange => "pref_change" => PrefChangeEvent,
        /// `user_typing`
        UserTyping => "user_typing" => UserTypingEvent,
        /// `user_change`
        UserChange => "user_change" => UserChangeEvent,
        /// `team_join`
        TeamJoin => "team_join" => TeamJoinEvent,
        /// `bot_added`
        BotAdded => "bot_added" => BotAddedEvent,
        /// `bot_changed`
        BotChanged => "bot_changed" => BotChangedEvent,
        /// `desktop_notification`
        DesktopNotification => "desktop_notification" => DesktopNotificationEvent,
        /// `mobile_in_app_notification`
        MobileInAppNotification => "mobile_in_app_notification" => MobileInAppNotificationEvent,
        /// `message` with neither `subtype` nor `channel_type`
        Message => "message" => MessageEvent,
        /// `channel_created`
        ChannelCreated => "channel_created" => ChannelCreatedEvent,
        /// `channel_joined`
        ChannelJoined => "channel_joined" => ChannelJoinedEvent,
        /// `channel_left`
        ChannelLeft => "channel_left" => ChannelLeftEvent,
        /// `channel_deleted`
        ChannelDeleted => "channel_deleted" => ChannelDeletedEvent,
        /// `channel_rename`
        ChannelRename => "channel_rename" => ChannelRenameEvent,
        /// `channel_archive`
        ChannelArchive => "channel_archive" => ChannelArchiveEvent,
        /// `channel_unarchive`
        ChannelUnarchive => "channel_unarchive" => ChannelUnarchiveEvent,
        /// `channel_marked`
        ChannelMarked => "channel_marked" => MarkedEvent,
        /// `channel_history_changed`
        ChannelHistoryChanged => "channel_history_changed" => HistoryChangedEvent,
        /// `member_joined_channel`
        MemberJoinedChannel => "member_joined_channel" => MemberJoinedChannelEvent,
        /// `member_left_channel`
        MemberLeftChannel => "member_left_channel" => MemberLeftChannelEvent,
        /// `im_created`
        ImCreated => "im_created" => ImCreatedEvent,
        /// `im_open`
        ImOpen => "im_open" => ImOpenEvent,
        /// `im_close`
        ImClose => "im_close" => ImCloseEvent,
        /// `im_marked`
        ImMarked => "im_marked" => MarkedEvent,
        /// `im_history_changed`
        ImHistoryChanged => "im_history_changed" => HistoryChangedEvent,
        /// `group_joined`
        GroupJoined => "group_joined" => GroupJoinedEvent,
        /// `group_left`
        GroupLeft => "group_left" => GroupLeftEvent,
        /// `group_open`
        GroupOpen => "group_open" => GroupOpenEvent,
        /// `group_close`
        GroupClose => "group_close" => GroupCloseEvent,
        /// `group_archive`
        GroupArchive => "group_archive" => GroupArchiveEvent,
        /// `group_unarchive`
        GroupUnarchive => "group_unarchive" => GroupUnarchiveEvent,
        /// `group_rename`
        GroupRename => "group_rename" => GroupRenameEvent,
        /// `group_marked`
        GroupMarked => "group_marked" => MarkedEvent,
        /// `group_history_changed`
        GroupHistoryChanged => "group_history_changed" => HistoryChangedEvent,
        /// `file_created`
        FileCreated => "file_created" => FileCreatedEvent,
        /// `file_shared`
        FileShared => "file_shared" => FileSharedEvent,
        /// `file_unshared`
        FileUnshared => "file_unshared" => FileUnsharedEvent,
        /// `file_public`
        FilePublic => "file_public" => FilePublicEvent,
        /// `file_private`
        FilePrivate => "file_private" => FilePrivateEvent,
        /// `file_change`
        FileChange => "file_change" => FileChangeEvent,
        /// `file_deleted`
        FileDeleted => "file_deleted" => FileDeletedEvent,
        /// `file_comment_added`
        FileCommentAdded => "file_comment_added" => FileCommentAddedEvent,
        /// `file_comment_edited`
        FileCommentEdited => "file_comment_edited" => FileCommentEditedEvent,
        /// `file_comment_deleted`
        FileCommentDeleted => "file_comment_deleted" => FileCommentDeletedEvent,
        /// `reaction_added`
        ReactionAdded => "reaction_added" => ReactionAddedEvent,
        /// `reaction_removed`
        ReactionRemoved => "reaction_removed" => ReactionRemovedEvent,
        /// `star_added`
        StarAdded => "star_added" => StarAddedEvent,
        /// `star_removed`
        StarRemoved => "star_removed" => StarRemovedEvent,
        /// `pin_added`
        PinAdded => "pin_added" => PinAddedEvent,
        /// `pin_removed`
        PinRemoved => "pin_removed" => PinRemovedEvent,
        /// `dnd_updated`
        DndUpdated => "dnd_updated" => DndUpdatedEvent,
        /// `dnd_updated_user`
        DndUpdatedUser => "dnd_updated_user" => DndUpdatedEvent,
        /// `team_rename`
        TeamRename => "team_rename" => TeamRenameEvent,
        /// `team_domain_change`
        TeamDomainChange => "team_domain_change" => TeamDomainChangeEvent,
        /// `team_pref_change`
        TeamPrefChange => "team_pref_change" => TeamPrefChangeEvent,
        /// `team_plan_change`
        TeamPlanChange => "team_plan_change" => TeamPlanChangeEvent,
        /// `team_profile_change`
        TeamProfileChange => "team_profile_change" => TeamProfileChangeEvent,
        /// `team_profile_delete`
        TeamProfileDelete => "team_profile_delete" => TeamProfileChangeEvent,
        /// `team_profile_reorder`
        TeamProfileReorder => "team_profile_reorder" => TeamProfileChangeEvent,
        /// `team_migration_started`
        TeamMigrationStarted => "team_migration_started" => TeamMigrationStartedEvent,
        /// `email_domain_changed`
        EmailDomainChanged => "email_domain_changed" => EmailDomainChangedEvent,
        /// `subteam_created`
        SubteamCreated => "subteam_created" => SubteamCreatedEvent,
        /// `subteam_updated`
        SubteamUpdated => "subteam_updated" => SubteamUpdatedEvent,
        /// `subteam_members_changed`
        SubteamMembersChanged => "subteam_members_changed" => SubteamMembersChangedEvent,
        /// `subteam_self_added`
        SubteamSelfAdded => "subteam_self_added" => SubteamSelfAddedEvent,
        /// `subteam_self_removed`
        SubteamSelfRemoved => "subteam_self_removed" => SubteamSelfRemovedEvent,
        /// `app_mention`
        AppMention => "app_mention" => AppMentionEvent,
        /// `app_home_opened`
        AppHomeOpened => "app_home_opened" => AppHomeOpenedEvent,
        /// `app_uninstalled`
        AppUninstalled => "app_uninstalled" => AppUninstalledEvent,
        /// `app_rate_limited`
        AppRateLimited => "app_rate_limited" => AppRateLimitedEvent,
    }
    message_subtypes {
        /// `bot_message`
        BotMessage => ["bot_message"] => BotMessageEvent,
        /// `me_message`
        MeMessage => ["me_message"] => MeMessageEvent,
        /// `message_changed`
        MessageChanged => ["message_changed"] => MessageChangedEvent,
        /// `message_deleted`
        MessageDeleted => ["message_deleted"] => MessageDeletedEvent,
        /// `message_replied`
        MessageReplied => ["message_replied"] => MessageRepliedEvent,
        /// `thread_broadcast`
        ThreadBroadcast => ["thread_broadcast"] => ThreadBroadcastEvent,
        /// `channel_join` / `group_join`
        JoinMessage => ["channel_join", "group_join"] => JoinMessageEvent,
        /// `channel_leave` / `group_leave`
        LeaveMessage => ["channel_leave", "group_leave"] => LeaveMessageEvent,
        /// `channel_topic` / `group_topic`
        TopicMessage => ["channel_topic", "group_topic"] => TopicMessageEvent,
        /// `channel_purpose` / `group_purpose`
        PurposeMessage => ["channel_purpose", "group_purpose"] => PurposeMessageEvent,
        /// `channel_name` / `group_name`
        NameMessage => ["channel_name", "group_name"] => NameMessageEvent,
        /// `channel_archive` / `group_archive`
        ArchiveMessage => ["channel_archive", "group_archive"] => ArchiveMessageEvent,
        /// `channel_unarchive` / `group_unarchive`
        UnarchiveMessage => ["channel_unarchive", "group_unarchive"] => UnarchiveMessageEvent,
        /// `file_share`
        FileShareMessage => ["file_share"] => FileShareMessageEvent,
        /// `file_comment`
        FileCommentMessage => ["file_comment"] => FileCommentMessageEvent,
        /// `file_mention`
        FileMentionMessage => ["file_mention"] => FileMentionMessageEvent,
        /// `pinned_item`
        PinnedItemMessage => ["pinned_item"] => PinnedItemMessageEvent,
        /// `unpinned_item`
        UnpinnedItemMessage => ["unpinned_item"] => PinnedItemMessageEvent,
    }
    message_channel_types {
        /// `message` delivered to an app home
        AppHomeMessage => ["app_home"] => MessageEvent,
        /// `message` delivered to a public channel
        ChannelMessage => ["channel"] => MessageEvent,
        /// `message` delivered to a private group or MPIM
        GroupMessage => ["group", "mpim"] => MessageEvent,
        /// `message` delivered to a direct message
        ImMessage => ["im"] => MessageEvent,
    }
}
