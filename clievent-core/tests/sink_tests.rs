//! Tests for the event sink contract and bundled sinks

use clievent_core::config::SinkConfig;
use clievent_core::event::{Connected, Event, EventKind, EventRecord, SharedEvent};
use clievent_core::sink::{
    build_sink, ChannelSink, CollectingSink, EventFilter, EventSink, FanoutSink, FilterSink,
    JsonLinesSink, LogSink,
};
use std::io::{BufRead, BufReader};
use std::sync::Arc;
use std::thread;

fn connected_event(user: &str) -> SharedEvent {
    Event::connected(Connected {
        user: user.to_string(),
        server_host: "vpn.example.com".to_string(),
        server_port: "443".to_string(),
        server_proto: "TCPv4".to_string(),
        server_ip: "203.0.113.5".to_string(),
        vpn_ip4: "10.8.0.2".to_string(),
        vpn_ip6: String::new(),
        client_ip: "198.51.100.9".to_string(),
        tun_name: "tun0".to_string(),
    })
    .into_shared()
}

#[test]
fn test_collecting_sink_keeps_order() {
    let sink = CollectingSink::new();
    assert!(sink.is_empty());

    sink.add_event(Event::resolve().into_shared());
    sink.add_event(Event::connecting().into_shared());
    sink.add_event(Event::auth_failed("bad password").into_shared());

    let kinds: Vec<EventKind> = sink.events().iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![EventKind::Resolve, EventKind::Connecting, EventKind::AuthFailed]
    );

    assert_eq!(sink.take().len(), 3);
    assert!(sink.is_empty());
}

#[test]
fn test_sink_shares_the_same_event() {
    let sink = CollectingSink::new();
    let event = Event::client_halt("server shutdown").into_shared();

    sink.add_event(Arc::clone(&event));

    let delivered = sink.events();
    assert!(Arc::ptr_eq(&delivered[0], &event));
}

#[test]
fn test_concurrent_producers_deliver_every_event_intact() {
    const PRODUCERS: usize = 8;
    const PER_PRODUCER: usize = 250;

    let sink = Arc::new(CollectingSink::new());

    let handles: Vec<_> = (0..PRODUCERS)
        .map(|producer| {
            let sink = Arc::clone(&sink);
            thread::spawn(move || {
                for seq in 0..PER_PRODUCER {
                    if seq % 2 == 0 {
                        sink.add_event(connected_event(&format!("user-{}-{}", producer, seq)));
                    } else {
                        sink.add_event(
                            Event::auth_failed(format!("fail-{}-{}", producer, seq)).into_shared(),
                        );
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let events = sink.events();
    assert_eq!(events.len(), PRODUCERS * PER_PRODUCER);

    for event in &events {
        match event.as_connected() {
            Some(info) => {
                assert!(info.user.starts_with("user-"));
                assert_eq!(info.server_host, "vpn.example.com");
                assert_eq!(info.tun_name, "tun0");
            }
            None => {
                assert_eq!(event.kind(), EventKind::AuthFailed);
                assert!(event.render().starts_with("fail-"));
            }
        }
    }
}

#[test]
fn test_sink_usable_through_trait_object() {
    let collecting = Arc::new(CollectingSink::new());
    let shared: Arc<dyn EventSink> = collecting.clone();

    shared.add_event(Event::pause().into_shared());
    (&*shared).add_event(Event::resume().into_shared());

    let boxed: Box<dyn EventSink> = Box::new(Arc::clone(&collecting));
    boxed.add_event(Event::wait().into_shared());

    assert_eq!(collecting.len(), 3);
}

#[tokio::test]
async fn test_channel_sink_preserves_order() {
    let (sink, mut receiver) = ChannelSink::new();

    sink.add_event(Event::resolve().into_shared());
    sink.add_event(Event::wait().into_shared());
    sink.add_event(connected_event("alice"));
    drop(sink);

    let mut kinds = Vec::new();
    while let Some(event) = receiver.recv().await {
        kinds.push(event.kind());
    }

    assert_eq!(
        kinds,
        vec![EventKind::Resolve, EventKind::Wait, EventKind::Connected]
    );
}

#[tokio::test]
async fn test_channel_sink_from_many_threads() {
    let (sink, mut receiver) = ChannelSink::new();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let sink = sink.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    sink.add_event(Event::reconnecting().into_shared());
                }
            })
        })
        .collect();
    drop(sink);

    for handle in handles {
        handle.join().unwrap();
    }

    let mut count = 0;
    while let Some(event) = receiver.recv().await {
        assert_eq!(event.kind(), EventKind::Reconnecting);
        count += 1;
    }
    assert_eq!(count, 400);
}

#[test]
fn test_channel_sink_drops_after_receiver_closed() {
    let (sink, receiver) = ChannelSink::new();
    drop(receiver);

    assert!(sink.is_closed());
    // Must not panic
    sink.add_event(Event::disconnected().into_shared());
}

#[test]
fn test_filter_errors_only() {
    let filter = EventFilter {
        errors_only: true,
        ignore: Vec::new(),
    };

    assert!(!filter.accepts(&Event::connecting()));
    assert!(filter.accepts(&Event::connection_timeout()));
    assert!(filter.accepts(&Event::auth_failed("x")));
}

#[test]
fn test_filter_ignore_list() {
    let filter = EventFilter {
        errors_only: false,
        ignore: vec![EventKind::Pause, EventKind::DynamicChallenge],
    };

    assert!(!filter.accepts(&Event::pause()));
    assert!(!filter.accepts(&Event::dynamic_challenge("CRV1:R:abc")));
    assert!(filter.accepts(&Event::resume()));
    assert!(EventFilter::new().accepts(&Event::pause()));
}

#[test]
fn test_filter_sink_forwards_accepted_only() {
    let collecting = Arc::new(CollectingSink::new());
    let sink = FilterSink::new(
        EventFilter {
            errors_only: true,
            ignore: vec![EventKind::ClientRestart],
        },
        Arc::clone(&collecting),
    );

    sink.add_event(Event::connecting().into_shared());
    sink.add_event(Event::client_restart("restart").into_shared());
    sink.add_event(Event::tun_setup_failed("no tun").into_shared());

    let events = collecting.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind(), EventKind::TunSetupFailed);
    assert!(sink.filter().errors_only);
}

#[test]
fn test_fanout_delivers_to_every_sink() {
    let first = Arc::new(CollectingSink::new());
    let second = Arc::new(CollectingSink::new());
    let fanout = FanoutSink::new()
        .with(Arc::clone(&first))
        .with(Arc::clone(&second))
        .with(LogSink);

    assert_eq!(fanout.len(), 3);

    let event = Event::proxy_error("407").into_shared();
    fanout.add_event(Arc::clone(&event));

    assert!(Arc::ptr_eq(&first.events()[0], &event));
    assert!(Arc::ptr_eq(&second.events()[0], &event));
}

#[test]
fn test_empty_fanout_accepts_events() {
    let fanout = FanoutSink::new();
    assert!(fanout.is_empty());
    fanout.add_event(Event::wait().into_shared());
}

#[test]
fn test_json_lines_sink_writes_one_record_per_event() {
    let sink = JsonLinesSink::new(Vec::new());

    sink.add_event(Event::resolve().into_shared());
    sink.add_event(Event::cert_verify_fail("self signed").into_shared());
    sink.add_event(connected_event("alice"));

    let output = String::from_utf8(sink.into_inner()).unwrap();
    let records: Vec<EventRecord> = output
        .lines()
        .map(|line| EventRecord::from_json_line(line).unwrap())
        .collect();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].kind, EventKind::Resolve);
    assert_eq!(records[1].reason.as_deref(), Some("self signed"));
    assert!(records[1].error);
    assert_eq!(
        records[2].rendered,
        "alice@vpn.example.com:443 (203.0.113.5) via 198.51.100.9/TCPv4 on tun0/10.8.0.2/"
    );
}

#[test]
fn test_json_lines_sink_appends_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("events.jsonl");

    {
        let sink = JsonLinesSink::append(&path).unwrap();
        sink.add_event(Event::connecting().into_shared());
    }
    {
        let sink = JsonLinesSink::append(&path).unwrap();
        sink.add_event(Event::disconnected().into_shared());
    }

    let file = std::fs::File::open(&path).unwrap();
    let kinds: Vec<EventKind> = BufReader::new(file)
        .lines()
        .map(|line| EventRecord::from_json_line(&line.unwrap()).unwrap().kind)
        .collect();

    assert_eq!(kinds, vec![EventKind::Connecting, EventKind::Disconnected]);
}

#[test]
fn test_build_sink_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");

    let config = SinkConfig {
        log: false,
        errors_only: false,
        ignore: vec![EventKind::Wait],
        json_log: Some(path.clone()),
    };

    let sink = build_sink(&config).unwrap();
    sink.add_event(Event::wait().into_shared());
    sink.add_event(Event::resolve().into_shared());
    sink.add_event(Event::epki_error("keystore locked").into_shared());
    drop(sink);

    let contents = std::fs::read_to_string(&path).unwrap();
    let kinds: Vec<EventKind> = contents
        .lines()
        .map(|line| EventRecord::from_json_line(line).unwrap().kind)
        .collect();

    assert_eq!(kinds, vec![EventKind::Resolve, EventKind::EpkiError]);
}

#[test]
fn test_build_sink_with_defaults() {
    let sink = build_sink(&SinkConfig::default()).unwrap();
    sink.add_event(Event::connecting().into_shared());
}
