mod sink_events;
