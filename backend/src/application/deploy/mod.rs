pub mod record_build_event;
