use cfgattr_application::services::{AttributeHandlerChain, DnsAttributeHandler};
use cfgattr_application::use_cases::{
    ApplyConfigurationUseCase, BuildConfigurationRequestUseCase,
};
use cfgattr_infrastructure::tunnel::ResolverSettingsBuilder;
use std::sync::Arc;

pub struct Services {
    pub builder: Arc<ResolverSettingsBuilder>,
    pub apply: ApplyConfigurationUseCase,
    pub build_request: BuildConfigurationRequestUseCase,
}

impl Services {
    pub fn new() -> Self {
        let builder = Arc::new(ResolverSettingsBuilder::new());

        let chain = Arc::new(
            AttributeHandlerChain::new()
                .with_handler(Arc::new(DnsAttributeHandler::new(builder.clone()))),
        );

        Self {
            builder,
            apply: ApplyConfigurationUseCase::new(chain.clone()),
            build_request: BuildConfigurationRequestUseCase::new(chain),
        }
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new()
    }
}
