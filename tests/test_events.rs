use chat_events::model::capability::{Capabilities, EventWithPayload};
use chat_events::model::event::*;
use chat_events::model::id::{ChannelId, ChannelType};
use chat_events::{decode, try_decode, DecodeError};
use serde_json::{json, Value};

const T: &str = "2020-07-21T14:47:57.001Z";

/// A minimal valid frame of a kind, and the fields it cannot be decoded without.
///
/// Each entry lists the JSON pointers to remove, separated by commas, and the model path the
/// resulting error must name.
struct Case {
    frame: Value,
    required: &'static [(&'static str, &'static str)],
    capabilities: Capabilities,
}

fn cases() -> Vec<Case> {
    let user = Capabilities::USER;
    let channel = Capabilities::CHANNEL;
    let message = Capabilities::MESSAGE;

    vec![
        Case {
            frame: json!({
                "type": "message.new",
                "cid": "messaging:general",
                "user": {"id": "luke_skywalker"},
                "message": {"id": "m1", "created_at": T},
            }),
            required: &[
                ("/user/id", "user.id"),
                ("/cid", "cid"),
                ("/message/id", "message.id"),
                ("/message/created_at", "message.created_at"),
            ],
            capabilities: user | channel | message,
        },
        Case {
            frame: json!({
                "type": "message.updated",
                "cid": "messaging:general",
                "user": {"id": "luke_skywalker"},
                "message": {"id": "m1", "updated_at": T},
            }),
            required: &[
                ("/user/id", "user.id"),
                ("/cid", "cid"),
                ("/message/id", "message.id"),
                ("/message/updated_at", "message.updated_at"),
            ],
            capabilities: user | channel | message,
        },
        Case {
            frame: json!({
                "type": "message.deleted",
                "cid": "messaging:general",
                "user": {"id": "luke_skywalker"},
                "message": {"id": "m1", "deleted_at": T},
            }),
            required: &[
                ("/user/id", "user.id"),
                ("/cid", "cid"),
                ("/message/id", "message.id"),
                ("/message/deleted_at", "message.deleted_at"),
            ],
            capabilities: user | channel | message,
        },
        Case {
            frame: json!({
                "type": "message.read",
                "cid": "messaging:general",
                "user": {"id": "luke_skywalker"},
                "created_at": T,
            }),
            required: &[("/user/id", "user.id"), ("/cid", "cid"), ("/created_at", "created_at")],
            capabilities: user | channel,
        },
        Case {
            frame: json!({
                "type": "reaction.new",
                "cid": "messaging:general",
                "user": {"id": "luke_skywalker"},
                "message": {"id": "m1"},
                "reaction": {"type": "like", "score": 1},
            }),
            required: &[
                ("/user/id", "user.id"),
                ("/cid", "cid"),
                ("/message/id", "message.id"),
                ("/reaction/type", "reaction.kind"),
                ("/reaction/score", "reaction.score"),
            ],
            capabilities: user | channel | message | Capabilities::REACTION,
        },
        Case {
            frame: json!({
                "type": "reaction.updated",
                "cid": "messaging:general",
                "user": {"id": "luke_skywalker"},
                "message": {"id": "m1"},
                "reaction": {"type": "love", "score": 3},
            }),
            required: &[("/reaction", "reaction.kind")],
            capabilities: user | channel | message | Capabilities::REACTION,
        },
        Case {
            frame: json!({
                "type": "reaction.deleted",
                "cid": "messaging:general",
                "user": {"id": "luke_skywalker"},
                "message": {"id": "m1"},
                "reaction": {"type": "like", "score": 1},
            }),
            required: &[("/message", "message.id")],
            capabilities: user | channel | message | Capabilities::REACTION,
        },
        Case {
            frame: json!({
                "type": "notification.message_new",
                "channel": {"cid": "messaging:general"},
                "message": {"id": "m1", "created_at": T, "user": {"id": "steep-moon-9"}},
            }),
            required: &[
                ("/message/user/id", "message.user.id"),
                ("/channel/cid", "channel.cid"),
                ("/message/id", "message.id"),
                ("/message/created_at", "message.created_at"),
            ],
            capabilities: user | channel | message,
        },
        Case {
            frame: json!({
                "type": "notification.mark_read",
                "channel": {"cid": "messaging:general"},
                "user": {"id": "steep-moon-9"},
                "created_at": T,
                "total_unread_count": 55,
                "unread_channels": 8,
            }),
            required: &[
                ("/user/id", "user.id"),
                ("/channel/cid", "channel.cid"),
                ("/created_at", "created_at"),
                ("/total_unread_count,/unread_channels", "unread_count"),
            ],
            capabilities: user | channel,
        },
        Case {
            frame: json!({
                "type": "notification.mark_all_read",
                "user": {"id": "steep-moon-9"},
                "created_at": T,
            }),
            required: &[("/user/id", "user.id"), ("/created_at", "created_at")],
            capabilities: user,
        },
        Case {
            frame: json!({
                "type": "notification.added_to_channel",
                "cid": "messaging:new_channel_5905",
            }),
            required: &[("/cid", "cid")],
            capabilities: channel,
        },
        Case {
            frame: json!({
                "type": "notification.removed_from_channel",
                "cid": "messaging:new_channel_5905",
            }),
            required: &[("/cid", "cid")],
            capabilities: channel,
        },
        Case {
            frame: json!({
                "type": "notification.invited",
                "channel": {"cid": "messaging:new_channel_1394"},
                "user": {"id": "broken-waterfall-5"},
                "member": {"invited": true, "role": "member"},
            }),
            required: &[
                ("/channel/cid", "channel.cid"),
                ("/user/id", "user.id"),
                ("/member/role", "member_container.invite.role"),
            ],
            capabilities: user | channel,
        },
        Case {
            frame: json!({
                "type": "notification.invite_accepted",
                "channel": {"cid": "messaging:new_channel_6293"},
                "user": {"id": "broken-waterfall-5"},
                "member": {"invited": true, "role": "member", "invite_accepted_at": T},
            }),
            required: &[
                ("/channel/cid", "channel.cid"),
                ("/user/id", "user.id"),
                ("/member/role", "member_container.invite.role"),
                ("/member/invite_accepted_at", "member_container.invite.invite_accepted_at"),
            ],
            capabilities: user | channel,
        },
        Case {
            frame: json!({
                "type": "notification.invite_rejected",
                "channel": {"cid": "messaging:new_channel_6293"},
                "user": {"id": "broken-waterfall-5"},
                "member": {"invited": true, "role": "member", "invite_rejected_at": T},
            }),
            required: &[
                ("/channel/cid", "channel.cid"),
                ("/user/id", "user.id"),
                ("/member/role", "member_container.invite.role"),
                ("/member/invite_rejected_at", "member_container.invite.invite_rejected_at"),
            ],
            capabilities: user | channel,
        },
        Case {
            frame: json!({
                "type": "notification.mutes_updated",
                "me": {"id": "luke_skywalker"},
            }),
            required: &[("/me/id", "current_user.id"), ("/me", "current_user.id")],
            capabilities: Capabilities::CURRENT_USER,
        },
        Case {
            frame: json!({
                "type": "notification.channel_mutes_updated",
                "me": {"id": "luke_skywalker"},
            }),
            required: &[("/me/id", "current_user.id")],
            capabilities: user,
        },
        Case {
            frame: json!({
                "type": "member.added",
                "cid": "messaging:new_channel_9125",
                "member": {"user": {"id": "steep-moon-9"}},
            }),
            required: &[
                ("/member/user/id", "member_container.member.user.id"),
                ("/member", "member_container.member.user.id"),
                ("/cid", "cid"),
            ],
            capabilities: Capabilities::MEMBER | channel,
        },
        Case {
            frame: json!({
                "type": "member.updated",
                "cid": "messaging:new_channel_9125",
                "member": {"user": {"id": "count_dooku"}, "role": "moderator"},
            }),
            required: &[
                ("/member/user/id", "member_container.member.user.id"),
                ("/cid", "cid"),
            ],
            capabilities: Capabilities::MEMBER | channel,
        },
        Case {
            frame: json!({
                "type": "member.removed",
                "cid": "messaging:new_channel_9125",
                "user": {"id": "r2-d2"},
            }),
            required: &[("/user/id", "user.id"), ("/cid", "cid")],
            capabilities: Capabilities::MEMBER | channel,
        },
        Case {
            frame: json!({
                "type": "user.presence.changed",
                "user": {"id": "luke_skywalker", "online": true},
            }),
            required: &[("/user/id", "user.id")],
            capabilities: user,
        },
        Case {
            frame: json!({
                "type": "user.updated",
                "user": {"id": "luke_skywalker"},
            }),
            required: &[("/user", "user.id")],
            capabilities: user,
        },
        Case {
            frame: json!({
                "type": "user.watching.start",
                "cid": "messaging:general",
                "user": {"id": "luke_skywalker"},
                "created_at": T,
                "watcher_count": 3,
            }),
            required: &[
                ("/cid", "cid"),
                ("/user/id", "user.id"),
                ("/created_at", "created_at"),
                ("/watcher_count", "watcher_count"),
            ],
            capabilities: user | channel,
        },
        Case {
            frame: json!({
                "type": "user.watching_stop",
                "cid": "messaging:general",
                "user": {"id": "luke_skywalker"},
                "created_at": T,
                "watcher_count": 2,
            }),
            required: &[("/watcher_count", "watcher_count")],
            capabilities: user | channel,
        },
        Case {
            frame: json!({
                "type": "user.banned",
                "cid": "messaging:general",
                "user": {"id": "count_dooku"},
                "created_by": {"id": "luke_skywalker"},
            }),
            required: &[
                ("/cid", "cid"),
                ("/user/id", "user.id"),
                ("/created_by/id", "created_by.id"),
            ],
            capabilities: user | channel,
        },
        Case {
            frame: json!({
                "type": "user.unbanned",
                "cid": "messaging:general",
                "user": {"id": "count_dooku"},
            }),
            required: &[("/cid", "cid"), ("/user/id", "user.id")],
            capabilities: user | channel,
        },
        Case {
            frame: json!({
                "type": "user.global_banned",
                "user": {"id": "count_dooku"},
            }),
            required: &[("/user/id", "user.id")],
            capabilities: user,
        },
        Case {
            frame: json!({
                "type": "user.global_unbanned",
                "user": {"id": "count_dooku"},
            }),
            required: &[("/user/id", "user.id")],
            capabilities: user,
        },
        Case {
            frame: json!({
                "type": "typing.start",
                "cid": "messaging:general",
                "user": {"id": "luke_skywalker"},
            }),
            required: &[("/cid", "cid"), ("/user/id", "user.id")],
            capabilities: user | channel | Capabilities::TYPING_STATE,
        },
        Case {
            frame: json!({
                "type": "typing.stop",
                "cid": "messaging:general",
                "user": {"id": "luke_skywalker"},
            }),
            required: &[("/cid", "cid"), ("/user/id", "user.id")],
            capabilities: user | channel | Capabilities::TYPING_STATE,
        },
        Case {
            frame: json!({
                "type": "channel.updated",
                "channel": {"cid": "messaging:general", "name": "General"},
            }),
            required: &[("/channel/cid", "channel.cid")],
            capabilities: channel,
        },
        Case {
            frame: json!({
                "type": "channel.deleted",
                "cid": "messaging:general",
                "created_at": T,
            }),
            required: &[("/cid", "cid"), ("/created_at", "created_at")],
            capabilities: channel,
        },
        Case {
            frame: json!({
                "type": "channel.truncated",
                "cid": "messaging:general",
                "created_at": T,
            }),
            required: &[("/cid", "cid"), ("/created_at", "created_at")],
            capabilities: channel,
        },
        Case {
            frame: json!({
                "type": "channel.hidden",
                "cid": "messaging:general",
                "user": {"id": "luke_skywalker"},
                "created_at": T,
            }),
            required: &[("/cid", "cid"), ("/user/id", "user.id"), ("/created_at", "created_at")],
            capabilities: user | channel,
        },
        Case {
            frame: json!({
                "type": "channel.visible",
                "cid": "messaging:general",
                "user": {"id": "luke_skywalker"},
            }),
            required: &[("/cid", "cid"), ("/user/id", "user.id")],
            capabilities: user | channel,
        },
        Case {
            frame: json!({
                "type": "health.check",
                "connection_id": "0a6f5a6d-0e14-4c5b-8a0c-1e3e2d3b9f41",
            }),
            required: &[("/connection_id", "connection_id")],
            capabilities: Capabilities::empty(),
        },
    ]
}

/// Removes the values at the given comma separated JSON pointers.
fn without(mut frame: Value, pointers: &str) -> Value {
    for pointer in pointers.split(',') {
        let (parent, key) = pointer.rsplit_once('/').unwrap();
        let removed = frame.pointer_mut(parent).unwrap().as_object_mut().unwrap().remove(key);

        assert!(removed.is_some(), "{pointer} is not in the frame");
    }

    frame
}

fn kind_of(frame: &Value) -> &str {
    frame["type"].as_str().unwrap()
}

/// The `cid` field of the concrete event struct, read without going through the capability.
fn concrete_cid(event: &Event) -> Option<&ChannelId> {
    Some(match event {
        Event::MessageNew(e) => &e.cid,
        Event::MessageUpdated(e) => &e.cid,
        Event::MessageDeleted(e) => &e.cid,
        Event::MessageRead(e) => &e.cid,
        Event::ReactionNew(e) | Event::ReactionUpdated(e) | Event::ReactionDeleted(e) => &e.cid,
        Event::NotificationMessageNew(e) => &e.cid,
        Event::NotificationMarkRead(e) => &e.cid,
        Event::NotificationAddedToChannel(e) => &e.cid,
        Event::NotificationRemovedFromChannel(e) => &e.cid,
        Event::NotificationInvited(e) => &e.cid,
        Event::NotificationInviteAccepted(e) => &e.cid,
        Event::NotificationInviteRejected(e) => &e.cid,
        Event::MemberAdded(e) => &e.cid,
        Event::MemberUpdated(e) => &e.cid,
        Event::MemberRemoved(e) => &e.cid,
        Event::UserWatching(e) => &e.cid,
        Event::UserBanned(e) => &e.cid,
        Event::UserUnbanned(e) => &e.cid,
        Event::Typing(e) => &e.cid,
        Event::ChannelUpdated(e) => &e.cid,
        Event::ChannelDeleted(e) => &e.cid,
        Event::ChannelTruncated(e) => &e.cid,
        Event::ChannelHidden(e) => &e.cid,
        Event::ChannelVisible(e) => &e.cid,
        _ => return None,
    })
}

#[test]
fn every_kind_decodes_from_a_minimal_frame() {
    let cases = cases();

    assert_eq!(cases.len(), EventType::KNOWN.len());

    for case in cases {
        let kind = EventType::from_tag(kind_of(&case.frame));
        let event = Event::from_value(case.frame.clone())
            .unwrap_or_else(|why| panic!("{kind} failed to decode: {why}"));

        assert_eq!(event.kind(), &kind);
    }
}

#[test]
fn every_required_field_is_required() {
    for case in cases() {
        for (pointers, path) in case.required {
            let frame = without(case.frame.clone(), pointers);

            match Event::from_value(frame) {
                Err(DecodeError::MissingRequiredField(missing)) => {
                    assert_eq!(missing, *path, "{} without {pointers}", kind_of(&case.frame));
                },
                other => panic!("{} without {pointers}: {other:?}", kind_of(&case.frame)),
            }
        }
    }
}

#[test]
fn decoding_is_idempotent() {
    for case in cases() {
        let raw = serde_json::to_vec(&case.frame).unwrap();

        assert_eq!(decode(&raw).unwrap(), decode(&raw).unwrap());
    }
}

#[test]
fn capabilities_match_the_kind() {
    for case in cases() {
        let event = Event::from_value(case.frame.clone()).unwrap();

        assert_eq!(event.capabilities(), case.capabilities, "{}", kind_of(&case.frame));
    }
}

#[test]
fn capability_views_agree() {
    for case in cases() {
        let event = Event::from_value(case.frame).unwrap();
        let capabilities = event.capabilities();

        assert_eq!(capabilities.contains(Capabilities::USER), event.user_id().is_some());
        assert_eq!(capabilities.contains(Capabilities::CHANNEL), event.channel_id().is_some());
        assert_eq!(capabilities.contains(Capabilities::MESSAGE), event.message_id().is_some());
        assert_eq!(capabilities.contains(Capabilities::MEMBER), event.member_user_id().is_some());
        assert_eq!(
            capabilities.contains(Capabilities::REACTION),
            event.as_reaction_event().is_some()
        );
        assert_eq!(
            capabilities.contains(Capabilities::CURRENT_USER),
            event.current_user_id().is_some()
        );
        assert_eq!(capabilities.contains(Capabilities::TYPING_STATE), event.is_typing().is_some());

        if let Some(with_channel) = event.as_channel_event() {
            assert_eq!(Some(with_channel.channel_id()), concrete_cid(&event));
            assert_eq!(event.channel_id(), concrete_cid(&event));
        }
        assert!(event.as_user_event().map_or(true, |e| e.user_id() == event.user_id().unwrap()));
    }
}

#[test]
fn member_removed_reads_the_top_level_user() {
    let frame = json!({
        "type": "member.removed",
        "cid": "messaging:new_channel_9125",
        "user": {"id": "r2-d2"},
        "member": {"user": {"id": "steep-moon-9"}},
    });

    let removed = Event::from_value(frame.clone()).unwrap();
    assert_eq!(removed.member_user_id().unwrap(), "r2-d2");

    let mut added = frame;
    added["type"] = json!("member.added");
    let added = Event::from_value(added).unwrap();
    assert_eq!(added.member_user_id().unwrap(), "steep-moon-9");

    let only_member = json!({
        "type": "member.removed",
        "cid": "messaging:new_channel_9125",
        "member": {"user": {"id": "steep-moon-9"}},
    });
    assert!(matches!(
        Event::from_value(only_member),
        Err(DecodeError::MissingRequiredField(path)) if path == "user.id"
    ));

    let only_user = json!({
        "type": "member.added",
        "cid": "messaging:new_channel_9125",
        "user": {"id": "r2-d2"},
    });
    assert!(matches!(
        Event::from_value(only_user),
        Err(DecodeError::MissingRequiredField(path)) if path == "member_container.member.user.id"
    ));
}

#[test]
fn invites_must_be_flagged() {
    for kind in [
        "notification.invited",
        "notification.invite_accepted",
        "notification.invite_rejected",
    ] {
        let invite = |invited: Value| {
            json!({
                "type": kind,
                "channel": {"cid": "messaging:new_channel_1394"},
                "user": {"id": "broken-waterfall-5"},
                "member": {
                    "invited": invited,
                    "role": "member",
                    "invite_accepted_at": T,
                    "invite_rejected_at": T,
                },
            })
        };

        assert!(Event::from_value(invite(json!(true))).is_ok());
        assert!(matches!(
            Event::from_value(invite(json!(false))),
            Err(DecodeError::InvariantViolated(_))
        ));
        assert!(matches!(
            Event::from_value(invite(Value::Null)),
            Err(DecodeError::InvariantViolated(_))
        ));
        // The flag is checked before anything else.
        assert!(matches!(
            Event::from_value(json!({"type": kind})),
            Err(DecodeError::InvariantViolated(_))
        ));
    }
}

#[test]
fn unknown_type() {
    let raw = br#"{"type": "totally.unknown", "cid": "messaging:general"}"#;

    match decode(raw) {
        Err(DecodeError::UnknownEventType(kind)) => assert_eq!(kind, "totally.unknown"),
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(try_decode(raw).unwrap(), None);
}

#[test]
fn malformed_frames() {
    let frames: [&[u8]; 5] =
        [b"not json", b"", b"[]", b"\"message.new\"", b"{\"type\": \"message.new\""];

    for raw in frames {
        assert!(matches!(decode(raw), Err(DecodeError::Malformed(_))));
        assert!(try_decode(raw).is_err());
    }

    assert!(matches!(decode(b"{}"), Err(DecodeError::MissingEventKind)));
}

#[test]
fn wrong_types_are_reported_with_their_path() {
    let frame = json!({
        "type": "message.new",
        "cid": "messaging:general",
        "user": {"id": "luke_skywalker"},
        "message": {"id": "m1", "created_at": T, "user": {"banned": "no"}},
    });

    match Event::from_value(frame) {
        Err(DecodeError::TypeMismatch {
            path,
            expected,
        }) => {
            assert_eq!(path, "message.user.is_banned");
            assert_eq!(expected, "a boolean");
        },
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn null_reads_as_absent() {
    let event = decode(
        br#"{
            "type": "message.read",
            "cid": "messaging:general",
            "user": {"id": "luke_skywalker", "name": null},
            "created_at": "2020-07-21T14:47:57Z",
            "total_unread_count": null,
            "watcher_count": null
        }"#,
    )
    .unwrap();

    match event {
        Event::MessageRead(e) => {
            assert_eq!(e.unread_count, None);
            assert_eq!(e.payload().user.as_ref().and_then(|u| u.name.clone()), None);
        },
        other => panic!("unexpected event: {other:?}"),
    }

    assert!(matches!(
        decode(br#"{"type": "user.updated", "user": null}"#),
        Err(DecodeError::MissingRequiredField(path)) if path == "user.id"
    ));
}

#[test]
fn optional_fields_do_not_fail_the_decode() {
    let event = decode(
        br#"{
            "type": "user.banned",
            "cid": "livestream:prime-time",
            "user": {"id": "count_dooku"},
            "created_by": {"id": "luke_skywalker"},
            "reason": "Sith lord",
            "some_future_field": {"nested": [1, 2, 3]}
        }"#,
    )
    .unwrap();

    match event {
        Event::UserBanned(e) => {
            assert_eq!(e.cid, ChannelId::new(ChannelType::Livestream, "prime-time"));
            assert_eq!(e.reason.as_deref(), Some("Sith lord"));
            assert_eq!(e.expired_at, None);
            assert_eq!(e.created_at, None);
        },
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn typing_state() {
    let start = decode(br#"{"type": "typing.start", "cid": "team:x", "user": {"id": "a"}}"#).unwrap();
    let stop = decode(br#"{"type": "typing.stop", "cid": "team:x", "user": {"id": "a"}}"#).unwrap();

    assert_eq!(start.is_typing(), Some(true));
    assert_eq!(stop.is_typing(), Some(false));
    assert_eq!(start.kind(), &EventType::TypingStart);
    assert_eq!(stop.kind(), &EventType::TypingStop);
}
