//! Moderation Integration Tests
//!
//! Subscribers on the broadcast channel observe bans and labels exactly
//! once per state change.

use letterbox_core::config::Config;
use letterbox_core::core_discussion::{ConversationId, Label, Letter, LetterId, ReplyId, Timestamp};
use letterbox_core::core_identity::{Account, AccountId, Profile, ProfileId};
use letterbox_core::core_moderation::{
    EventBroadcaster, ModerationAction, ModerationEvent, ModerationService,
};
use letterbox_core::core_space::{Space, SpaceId};
use std::sync::Arc;
use tokio::sync::broadcast::error::TryRecvError;

fn service_from_config() -> ModerationService {
    let config = Config::default();
    ModerationService::new(EventBroadcaster::new(config.events.capacity))
}

#[tokio::test]
async fn test_malicious_reply_leads_to_ban() {
    let service = service_from_config();
    let mut rx = service.events().subscribe();

    let space = Arc::new(Space::new(SpaceId::new("chess"), "Chess"));
    let author = Arc::new(Profile::new(ProfileId::new("p1"), Arc::clone(&space)));
    let troll = Arc::new(Profile::new(ProfileId::new("p2"), Arc::clone(&space)));
    let mut troll_account = Account::new(AccountId::new("a2"), vec![Arc::clone(&troll)]);

    let letter = Arc::new(Letter::new(LetterId::new("L"), "Best endgame book?", author));
    let conversation =
        letter.start_new_conversation(ConversationId::new("c1"), Arc::clone(&troll));
    let mut reply = conversation.send_reply(
        troll,
        "You should quit chess",
        ReplyId::new("r1"),
        Timestamp::now(),
    );

    let consequence = service
        .label_reply(&mut reply, Label::Malice)
        .expect("unlabeled reply accepts a label");
    assert_eq!(consequence, ModerationAction::ReviewAccount);

    let event = rx.recv().await.expect("label event");
    assert!(event.needs_review());
    match event {
        ModerationEvent::ReplyLabeled {
            reply_id,
            conversation_id,
            author_id,
            label,
            ..
        } => {
            assert_eq!(reply_id, ReplyId::new("r1"));
            assert_eq!(conversation_id, ConversationId::new("c1"));
            assert_eq!(author_id, ProfileId::new("p2"));
            assert_eq!(label, Label::Malice);

            // The review layer maps the profile back to its account and bans it
            assert!(troll_account
                .profiles()
                .iter()
                .any(|profile| profile.id == author_id));
            assert!(service.ban(&mut troll_account));
        }
        other => panic!("Expected ReplyLabeled, got {:?}", other),
    }

    let event = rx.recv().await.expect("ban event");
    assert!(matches!(
        event,
        ModerationEvent::AccountBanned { ref account_id, .. } if account_id == &AccountId::new("a2")
    ));
    assert!(troll_account.is_banned());
}

#[tokio::test]
async fn test_relabel_is_rejected_without_event() {
    let service = service_from_config();
    let mut rx = service.events().subscribe();

    let space = Arc::new(Space::new(SpaceId::new("maths"), "Mathematics"));
    let author = Arc::new(Profile::new(ProfileId::new("p1"), Arc::clone(&space)));
    let responder = Arc::new(Profile::new(ProfileId::new("p2"), space));
    let letter = Arc::new(Letter::new(LetterId::new("L"), "Why is e natural?", author));
    let conversation =
        letter.start_new_conversation(ConversationId::new("c1"), Arc::clone(&responder));
    let mut reply = conversation.send_reply(
        responder,
        "It is its own derivative",
        ReplyId::new("r1"),
        Timestamp::now(),
    );

    assert_eq!(
        service.label_reply(&mut reply, Label::Exemplary),
        Ok(ModerationAction::ShowOnProfile)
    );
    assert!(service.label_reply(&mut reply, Label::Malice).is_err());
    assert_eq!(reply.label(), Some(Label::Exemplary));

    assert!(matches!(
        rx.recv().await,
        Ok(ModerationEvent::ReplyLabeled {
            label: Label::Exemplary,
            ..
        })
    ));
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn test_every_subscriber_sees_events() {
    let service = service_from_config();
    let mut moderators = service.events().subscribe();
    let mut notifier = service.events().subscribe();
    assert_eq!(service.events().subscriber_count(), 2);

    let mut account = Account::new(AccountId::new("a1"), Vec::new());
    assert!(service.ban(&mut account));
    assert!(service.unban(&mut account));
    assert!(!service.unban(&mut account));

    for rx in [&mut moderators, &mut notifier] {
        assert_eq!(rx.recv().await.map(|e| e.event_type()), Ok("account_banned"));
        assert_eq!(
            rx.recv().await.map(|e| e.event_type()),
            Ok("account_unbanned")
        );
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }
}

#[test]
fn test_events_serialize_for_downstream_consumers() {
    let event = ModerationEvent::AccountBanned {
        account_id: AccountId::new("a1"),
        at: Timestamp::from_millis(42),
    };

    let json = serde_json::to_value(&event).expect("serialize");
    assert_eq!(json["type"], "account_banned");
    assert_eq!(json["account_id"], "a1");
    assert_eq!(json["at"], 42);

    let back: ModerationEvent = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, event);
}
