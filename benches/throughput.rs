use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use plexircd::network::{Client, ClientId, EventHandler, Transport};
use plexircd::state::ServerInfo;
use plexircd::Engine;

// Measures protocol engine dispatch with a transport that only counts bytes,
// so no sockets are involved.

#[derive(Default)]
struct CountingTransport {
    clients: usize,
    bytes: usize,
}

impl Transport for CountingTransport {
    fn send_to(&mut self, _client: ClientId, data: &str) {
        self.bytes += data.len();
    }

    fn broadcast(&mut self, data: &str) {
        self.bytes += data.len() * self.clients;
    }

    fn disconnect_client(&mut self, _client: ClientId) {}

    fn connected_clients_count(&self) -> usize {
        self.clients
    }
}

fn client(n: usize) -> Client {
    Client {
        id: ClientId::new(n),
        addr: ([127, 0, 0, 1], 50000).into(),
    }
}

/// An engine with `members` registered users all joined to `#bench`.
fn populated_engine(members: usize, out: &mut CountingTransport) -> Engine {
    let mut engine = Engine::new(ServerInfo::new("bench.server", "BenchNet"), "pw");
    for n in 1..=members {
        let c = client(n);
        out.clients += 1;
        engine.on_connect(out, &c);
        engine.on_message(out, &c, "PASS pw");
        engine.on_message(out, &c, &format!("NICK user{n}"));
        engine.on_message(out, &c, &format!("USER user{n} host"));
        engine.on_message(out, &c, "JOIN #bench");
    }
    engine
}

fn channel_fanout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    for members in [2usize, 50, 500] {
        let mut out = CountingTransport::default();
        let mut engine = populated_engine(members, &mut out);
        let sender = client(1);

        group.bench_function(format!("privmsg_channel_{members}"), |b| {
            b.iter(|| engine.on_message(&mut out, &sender, "PRIVMSG #bench :Hello world"))
        });
    }

    group.finish();
}

fn registration_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("registration");
    group.throughput(Throughput::Elements(1));

    group.bench_function("handshake", |b| {
        b.iter_batched(
            || {
                let mut out = CountingTransport::default();
                let engine = populated_engine(0, &mut out);
                (engine, out)
            },
            |(mut engine, mut out)| {
                let c = client(1);
                out.clients = 1;
                engine.on_connect(&mut out, &c);
                for line in ["PASS pw", "CAP LS", "CAP END", "NICK alice", "USER alice host"] {
                    engine.on_message(&mut out, &c, line);
                }
                out.bytes
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, channel_fanout_benchmark, registration_benchmark);
criterion_main!(benches);
