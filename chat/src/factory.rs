//! Composition root: turns configuration into concrete providers.
//!
//! This is the only place that names concrete avatar adapters.

use std::sync::Arc;

use tracer::Tracer;

use crate::{
    adapters::outbound::avatar::{AuthAvatar, FileSystemAvatar, GravatarAvatar},
    config::{AvatarSettings, ProviderKind, TraceSettings, TraceSink},
    domain::{ports::outbound::AvatarProvider, services::AvatarChain},
};

pub fn build_tracer(settings: &TraceSettings) -> Tracer {
    match settings.sink {
        TraceSink::Off => Tracer::off(),
        TraceSink::Stdout => Tracer::stdout(),
        TraceSink::Stderr => Tracer::stderr(),
        TraceSink::Tracing => Tracer::forward_to_tracing(),
    }
}

/// Builds the avatar chain with providers in configured order.
pub fn build_avatar_chain(settings: &AvatarSettings, tracer: Tracer) -> AvatarChain {
    let providers = settings
        .providers
        .iter()
        .map(|kind| build_provider(*kind, settings, &tracer))
        .collect::<Vec<_>>();

    let chain = AvatarChain::new(providers).with_tracer(tracer);
    tracing::info!(providers = ?chain.provider_names(), "avatar chain ready");

    chain
}

fn build_provider(
    kind: ProviderKind,
    settings: &AvatarSettings,
    tracer: &Tracer,
) -> Arc<dyn AvatarProvider> {
    match kind {
        ProviderKind::Auth => Arc::new(AuthAvatar),
        ProviderKind::Gravatar => Arc::new(GravatarAvatar::new(settings.gravatar_url.as_str())),
        ProviderKind::FileSystem => Arc::new(
            FileSystemAvatar::new(settings.directory.clone(), settings.public_path.as_str())
                .with_tracer(tracer.clone()),
        ),
    }
}
