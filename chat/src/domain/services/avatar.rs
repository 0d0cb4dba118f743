use std::{fmt, sync::Arc};

use tracer::{trace, Tracer};

use crate::domain::{
    models::{AuthenticatedUser, AvatarUrl},
    ports::outbound::AvatarProvider,
    AvatarError,
};

/// Ordered composition of avatar providers.
///
/// Providers are consulted in construction order and the first URL wins.
/// The order is the only precedence rule. The chain holds no per-call state,
/// so one instance is shared by every participant in the room.
#[derive(Clone, Default)]
pub struct AvatarChain {
    providers: Vec<Arc<dyn AvatarProvider>>,
    tracer: Tracer,
}

impl AvatarChain {
    pub fn new(providers: Vec<Arc<dyn AvatarProvider>>) -> Self {
        Self {
            providers,
            tracer: Tracer::off(),
        }
    }

    pub fn with_tracer(mut self, tracer: Tracer) -> Self {
        self.tracer = tracer;
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|provider| provider.name()).collect()
    }
}

impl AvatarProvider for AvatarChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn resolve(&self, user: &AuthenticatedUser) -> Result<AvatarUrl, AvatarError> {
        let unique_id = user.unique_id();

        for provider in &self.providers {
            match provider.resolve(user) {
                Ok(url) => {
                    trace!(
                        self.tracer,
                        "avatar: {} resolved {} for {}",
                        provider.name(),
                        url,
                        unique_id
                    );
                    return Ok(url);
                }
                Err(err) => {
                    trace!(
                        self.tracer,
                        "avatar: {} missed for {}: {}",
                        provider.name(),
                        unique_id,
                        err
                    );
                }
            }
        }

        trace!(self.tracer, "avatar: no provider produced a URL for {}", unique_id);
        Err(AvatarError::NoAvatarUrl)
    }
}

impl fmt::Debug for AvatarChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvatarChain")
            .field("providers", &self.provider_names())
            .field("tracer", &self.tracer)
            .finish()
    }
}
