use anyhow::Context;
use tracer::trace;

use chat::{
    config::read_config,
    domain::models::{AuthenticatedUser, ChatMessage, UniqueId},
    factory::{build_avatar_chain, build_tracer},
    telemetry::init_tracing,
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let settings = read_config().context("Failed to read configuration")?;
    let tracer = build_tracer(&settings.trace);
    let avatars = build_avatar_chain(&settings.avatar, tracer.clone());

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        tracing::warn!("no users given, usage: chat <unique-id|email>...");
        return Ok(());
    }

    for arg in args {
        let unique_id = if arg.contains('@') {
            UniqueId::from_email(&arg)
        } else {
            UniqueId::try_from(arg.as_str())
                .with_context(|| format!("Invalid unique id '{arg}'"))?
        };

        let user = AuthenticatedUser::new(unique_id).with_name(arg);
        trace!(tracer, "client joined: {}", user.unique_id());

        let message = ChatMessage::compose(&user, "joined the room", &avatars);
        println!("{}", serde_json::to_string(&message)?);
    }

    Ok(())
}
