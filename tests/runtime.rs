//! Delivery guarantees of the runtime, exercised through the public API.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    thread,
};

use mailroom::{
    Actor, ActorId, Context, Error, Message, MessageKind, Outcome, Payload, Runtime,
};
use parking_lot::Mutex;

const PING: MessageKind = MessageKind::new(100);
const PONG: MessageKind = MessageKind::new(101);

#[derive(Debug, Payload)]
enum TestPayload {
    Number(u64),
    Text(String),
    Tracked(DropProbe),
}

/// Counts how often it is dropped.
#[derive(Debug)]
struct DropProbe(Arc<AtomicUsize>);

impl Drop for DropProbe {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

type Log = Arc<Mutex<Vec<(ActorId, MessageKind, Option<u64>)>>>;

fn recorder(log: &Log) -> impl Actor<TestPayload> {
    let log = log.clone();
    move |ctx: &Context<TestPayload>, msg: &mut Message<TestPayload>| {
        let value = match msg.payload() {
            Some(TestPayload::Number(n)) => Some(*n),
            _ => None,
        };
        log.lock().push((ctx.id(), msg.kind(), value));
        Outcome::Continue
    }
}

#[test]
fn test_example_scenario() {
    let mut rt = Runtime::<TestPayload>::default();
    let log = Log::default();

    let a = rt.create(ActorId::ROOT, Some("A"), recorder(&log), TestPayload::Number(1));
    assert_eq!(a.as_u64(), 1);

    let queued = rt.handle().queued();
    assert_eq!(queued.len(), 1);
    assert_eq!(queued[0].sender(), ActorId::ROOT);
    assert_eq!(queued[0].target(), a);
    assert_eq!(queued[0].kind(), MessageKind::INIT);

    assert_eq!(rt.drain_all(), 1);
    assert_eq!(*log.lock(), vec![(a, MessageKind::INIT, Some(1))]);
    assert_eq!(rt.pending(), 0);

    let info = rt.handle().lookup(a).expect("registered");
    assert_eq!(info.name(), "A");
    assert_eq!(info.parent, Some(ActorId::ROOT));
}

#[test]
fn test_fifo_across_targets() {
    let mut rt = Runtime::<TestPayload>::default();
    let log = Log::default();
    let a = rt.create(ActorId::ROOT, Some("a"), recorder(&log), None);
    let b = rt.create(ActorId::ROOT, Some("b"), recorder(&log), None);
    let c = rt.create(ActorId::ROOT, Some("c"), recorder(&log), None);
    rt.drain_all();
    log.lock().clear();

    let order = [c, a, b, a, c, b, b, a];
    for (i, target) in order.iter().enumerate() {
        rt.post(ActorId::ROOT, *target, PING, TestPayload::Number(i as u64));
    }
    assert_eq!(rt.drain_all(), order.len());

    let delivered: Vec<_> = log.lock().iter().map(|(id, _, v)| (*id, *v)).collect();
    let expected: Vec<_> = order
        .iter()
        .enumerate()
        .map(|(i, id)| (*id, Some(i as u64)))
        .collect();
    assert_eq!(delivered, expected);
}

#[test]
fn test_init_is_first_and_carries_create_payload() {
    let mut rt = Runtime::<TestPayload>::default();
    let log = Log::default();

    let parent_log = log.clone();
    let parent = rt.create(
        ActorId::ROOT,
        Some("parent"),
        move |ctx: &Context<TestPayload>, msg: &mut Message<TestPayload>| {
            if msg.kind() == MessageKind::INIT {
                // Post to the child right after creating it, in the same handler.
                let child = ctx.spawn(Some("child"), recorder(&parent_log), TestPayload::Number(7));
                ctx.post(child, PING, TestPayload::Number(8));
                ctx.post(child, PONG, TestPayload::Number(9));
            }
            Outcome::Continue
        },
        None,
    );
    rt.drain_all();

    let log = log.lock();
    assert_eq!(log.len(), 3);
    let child = log[0].0;
    assert_ne!(child, parent);
    assert_eq!(log[0], (child, MessageKind::INIT, Some(7)));
    assert_eq!(log[1], (child, PING, Some(8)));
    assert_eq!(log[2], (child, PONG, Some(9)));
    assert_eq!(
        rt.handle().lookup(child).and_then(|i| i.parent),
        Some(parent)
    );
}

#[test]
fn test_init_sender_is_parent() {
    let mut rt = Runtime::<TestPayload>::default();
    let senders = Arc::new(Mutex::new(Vec::new()));
    let s = senders.clone();
    let parent = rt.create(ActorId::ROOT, None, |_: &Context<TestPayload>, _: &mut Message<TestPayload>| Outcome::Continue, None);
    let child = rt.create(
        parent,
        None,
        move |_: &Context<TestPayload>, msg: &mut Message<TestPayload>| {
            s.lock().push(msg.sender());
            Outcome::Continue
        },
        None,
    );
    rt.drain_all();
    assert_eq!(*senders.lock(), vec![parent]);
    assert_ne!(child, parent);
}

#[test]
fn test_drain_completes_reentrant_posts() {
    let mut rt = Runtime::<TestPayload>::default();
    let hops = Arc::new(AtomicUsize::new(0));

    // Each message re-posts to self until the counter reaches zero.
    let h = hops.clone();
    let id = rt.create(
        ActorId::ROOT,
        Some("countdown"),
        move |ctx: &Context<TestPayload>, msg: &mut Message<TestPayload>| {
            let remaining = match msg.payload() {
                Some(TestPayload::Number(n)) => *n,
                _ => return Outcome::Error,
            };
            h.fetch_add(1, Ordering::SeqCst);
            if remaining > 0 {
                ctx.post(ctx.id(), PING, TestPayload::Number(remaining - 1));
            }
            Outcome::Continue
        },
        TestPayload::Number(50),
    );

    assert_eq!(rt.drain_all(), 51);
    assert_eq!(hops.load(Ordering::SeqCst), 51);
    assert_eq!(rt.pending(), 0);
    assert!(rt.handle().lookup(id).is_some());
}

#[test]
fn test_payload_released_once_after_handler() {
    let mut rt = Runtime::<TestPayload>::default();
    let drops = Arc::new(AtomicUsize::new(0));
    let dropped_during_handler = Arc::new(AtomicBool::new(false));

    let d = drops.clone();
    let flag = dropped_during_handler.clone();
    let id = rt.create(
        ActorId::ROOT,
        None,
        move |_: &Context<TestPayload>, msg: &mut Message<TestPayload>| {
            if matches!(msg.payload(), Some(TestPayload::Tracked(_))) && d.load(Ordering::SeqCst) != 0 {
                flag.store(true, Ordering::SeqCst);
            }
            Outcome::Continue
        },
        None,
    );
    rt.drain_all();

    rt.post(ActorId::ROOT, id, PING, TestPayload::Tracked(DropProbe(drops.clone())));
    assert_eq!(drops.load(Ordering::SeqCst), 0);
    rt.drain_all();

    assert_eq!(drops.load(Ordering::SeqCst), 1);
    assert!(!dropped_during_handler.load(Ordering::SeqCst));
}

#[test]
fn test_taken_payload_is_not_released_by_runtime() {
    let mut rt = Runtime::<TestPayload>::default();
    let drops = Arc::new(AtomicUsize::new(0));
    let kept = Arc::new(Mutex::new(Vec::new()));

    let k = kept.clone();
    rt.create(
        ActorId::ROOT,
        None,
        move |_: &Context<TestPayload>, msg: &mut Message<TestPayload>| {
            if let Some(payload) = msg.take_payload() {
                k.lock().push(payload);
            }
            Outcome::Continue
        },
        TestPayload::Tracked(DropProbe(drops.clone())),
    );
    rt.drain_all();
    assert_eq!(drops.load(Ordering::SeqCst), 0);

    kept.lock().clear();
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unknown_target_releases_payload() {
    init_logging();
    let mut rt = Runtime::<TestPayload>::default();
    let drops = Arc::new(AtomicUsize::new(0));
    rt.post(
        ActorId::ROOT,
        ActorId::from_raw(99),
        PING,
        TestPayload::Tracked(DropProbe(drops.clone())),
    );

    let err = rt.try_drain_all().expect_err("unknown target");
    assert!(matches!(err, Error::UnknownActor(id) if id.as_u64() == 99));
    assert_eq!(err.to_string(), "actor not found: 99");
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
#[should_panic(expected = "actor not found: 5")]
fn test_unknown_target_is_fatal() {
    init_logging();
    let mut rt = Runtime::<TestPayload>::default();
    rt.post(ActorId::ROOT, ActorId::from_raw(5), PING, TestPayload::Text("lost".into()));
    rt.drain_all();
}

#[test]
fn test_concurrent_producers_deliver_exactly_once() {
    const PRODUCERS: u64 = 4;
    const PER_PRODUCER: u64 = 500;

    let mut rt = Runtime::<TestPayload>::default();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let s = seen.clone();
    let sink = rt.create(
        ActorId::ROOT,
        Some("sink"),
        move |_: &Context<TestPayload>, msg: &mut Message<TestPayload>| {
            if let Some(TestPayload::Number(n)) = msg.payload() {
                s.lock().push((msg.sender(), *n));
            }
            Outcome::Continue
        },
        None,
    );

    let producers: Vec<_> = (0..PRODUCERS)
        .map(|p| {
            let handle = rt.handle();
            thread::spawn(move || {
                let me = ActorId::from_raw(1_000 + p);
                for i in 0..PER_PRODUCER {
                    handle.post(me, sink, PING, TestPayload::Number(i));
                }
            })
        })
        .collect();

    // Drain while the producers are still appending.
    while producers.iter().any(|p| !p.is_finished()) {
        rt.drain_all();
        thread::yield_now();
    }
    for p in producers {
        p.join().expect("producer thread");
    }
    rt.drain_all();

    let seen = seen.lock();
    assert_eq!(seen.len() as u64, PRODUCERS * PER_PRODUCER);
    for p in 0..PRODUCERS {
        let me = ActorId::from_raw(1_000 + p);
        let sequence: Vec<u64> = seen.iter().filter(|(s, _)| *s == me).map(|(_, n)| *n).collect();
        assert_eq!(sequence, (0..PER_PRODUCER).collect::<Vec<_>>());
    }
}

#[test]
fn test_independent_runtimes() {
    let mut first = Runtime::<TestPayload>::default();
    let mut second = Runtime::<TestPayload>::default();
    let log = Log::default();

    let a = first.create(ActorId::ROOT, None, recorder(&log), None);
    let b = second.create(ActorId::ROOT, None, recorder(&log), None);
    assert_eq!(a, b);

    assert_eq!(first.drain_all(), 1);
    assert_eq!(second.pending(), 1);
    assert_eq!(second.drain_all(), 1);
}

#[test]
fn test_early_message_to_future_identity_never_precedes_init() {
    init_logging();
    let mut rt = Runtime::<TestPayload>::default();
    let log = Log::default();
    let drops = Arc::new(AtomicUsize::new(0));

    rt.post(
        ActorId::ROOT,
        ActorId::from_raw(1),
        PING,
        TestPayload::Tracked(DropProbe(drops.clone())),
    );
    let a = rt.create(ActorId::ROOT, Some("a"), recorder(&log), TestPayload::Number(1));
    assert_eq!(a, ActorId::from_raw(1));

    let err = rt.try_drain_all().expect_err("message predates the actor");
    assert!(matches!(err, Error::UnknownActor(id) if id == a));
    assert_eq!(drops.load(Ordering::SeqCst), 1);
    assert!(log.lock().is_empty());

    assert_eq!(rt.try_drain_all().expect("INIT is deliverable"), 1);
    rt.post(ActorId::ROOT, a, PONG, TestPayload::Number(2));
    rt.drain_all();
    assert_eq!(
        *log.lock(),
        vec![(a, MessageKind::INIT, Some(1)), (a, PONG, Some(2))]
    );
}
