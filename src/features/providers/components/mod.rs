pub mod api_keys_view;
pub mod provider_card;

pub use api_keys_view::ApiKeysView;
pub use provider_card::ProviderCard;
