//! HTTP clients shared through context.

use api::{HttpGateway, IdentityClient};
use dioxus::prelude::*;
use domain::AppConfig;

/// Build the gateway and identity clients once and provide them to every
/// view below.
#[component]
pub fn ApiProvider(config: AppConfig, children: Element) -> Element {
    use_context_provider(|| HttpGateway::new(&config.gateway));
    use_context_provider(|| IdentityClient::new(&config.identity));

    rsx! {
        {children}
    }
}

pub fn use_gateway() -> HttpGateway {
    use_context::<HttpGateway>()
}

pub fn use_identity() -> IdentityClient {
    use_context::<IdentityClient>()
}
