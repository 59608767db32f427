pub mod http;
pub mod supabase;
