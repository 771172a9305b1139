//! Example driving one discussion from letter to labeled reply
//!
//! Run with:
//! ```bash
//! LETTERBOX_LOG_LEVEL=debug cargo run --example discussion_demo
//! ```

use letterbox_core::config::Config;
use letterbox_core::core_discussion::{ConversationId, Label, Letter, LetterId, ReplyId, Timestamp};
use letterbox_core::core_identity::{Account, AccountId, ProfileId};
use letterbox_core::core_moderation::{EventBroadcaster, ModerationService};
use letterbox_core::core_policy::{Actor, Guard};
use letterbox_core::core_space::{Space, SpaceId};
use letterbox_core::logging::{init_logging_with_config, LogConfig};
use letterbox_core::metrics;
use std::sync::Arc;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_logging_with_config(LogConfig::try_from(&config.logging)?)?;
    if config.metrics.enabled {
        metrics::init_metrics();
    }

    let space = Arc::new(Space::new(SpaceId::generate(), "Tide pools"));
    let alice = Account::new(AccountId::new("alice"), Vec::new());
    let bob = Account::new(AccountId::new("bob"), Vec::new());
    let alice_profile =
        Arc::new(alice.create_profile(ProfileId::new("anemone"), Arc::clone(&space)));
    let bob_profile = Arc::new(bob.create_profile(ProfileId::new("hermit-crab"), space));

    let letter = Arc::new(Letter::new(
        LetterId::generate(),
        "What lives in the pool at low tide?",
        Arc::clone(&alice_profile),
    ));
    let conversation =
        letter.start_new_conversation(ConversationId::generate(), Arc::clone(&bob_profile));

    let guard: Guard = Guard::default();
    let mut reply = guard.send_reply(
        &conversation,
        bob_profile,
        "Mostly limpets and the occasional starfish",
        ReplyId::generate(),
        Timestamp::now(),
    )?;

    guard.request_publication(&Actor::Profile(alice_profile.id.clone()), &conversation)?;
    guard.accept_publication(&Actor::Profile(ProfileId::new("hermit-crab")), &conversation)?;
    info!(state = %conversation.publication_state(), "Publication settled");

    let moderation = ModerationService::new(EventBroadcaster::new(config.events.capacity));
    let mut events = moderation.events().subscribe();
    let consequence = moderation.label_reply(&mut reply, Label::Exemplary)?;
    info!(?consequence, "Reply labeled");

    let event = events.try_recv()?;
    println!("{}", serde_json::to_string_pretty(&event)?);

    Ok(())
}
