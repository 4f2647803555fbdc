mod event_flow_tests;
mod sync_channel_tests;
