pub mod in_memory_identity_provider;
pub mod supabase_identity_client;

pub use in_memory_identity_provider::InMemoryIdentityProvider;
pub use supabase_identity_client::SupabaseIdentityClient;
