pub mod supabase_session_verifier;
