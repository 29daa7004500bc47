//! Ping-Pong Example
//!
//! Two actors bounce a counter back and forth through the shared mailbox
//! until it reaches a limit. Everything happens inside a single `drain_all`:
//! each handler posts the next message while the drain is running.
//!
//! The first actor learns who its partner is from its INIT payload, which
//! shows the usual way of handing configuration to a new actor.

use mailroom::*;

const PING: MessageKind = MessageKind::new(100);
const PONG: MessageKind = MessageKind::new(101);

#[derive(Debug, Payload)]
enum Rally {
    Partner(ActorId),
    Hit(u32),
}

struct Player {
    partner: Option<ActorId>,
    limit: u32,
}

impl Actor<Rally> for Player {
    fn handle(&mut self, ctx: &Context<Rally>, msg: &mut Message<Rally>) -> Outcome {
        match (msg.kind(), msg.payload()) {
            (MessageKind::INIT, Some(Rally::Partner(partner))) => {
                self.partner = Some(*partner);
                ctx.post(*partner, PING, Rally::Hit(1));
                Outcome::Continue
            }
            (MessageKind::INIT, _) => Outcome::Continue,
            (PING | PONG, Some(Rally::Hit(n))) => {
                println!("{} got {} #{n}", ctx.name(), msg.kind());
                if *n >= self.limit {
                    ctx.post_to_parent(MessageKind::CLOSE, Rally::Hit(*n));
                    return Outcome::Stop;
                }
                let reply = if msg.kind() == PING { PONG } else { PING };
                ctx.post(self.partner.unwrap_or(msg.sender()), reply, Rally::Hit(n + 1));
                Outcome::Continue
            }
            _ => Outcome::UnrecognisedKind,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let mut runtime = Runtime::<Rally>::new(Config::default().with_stop_policy(StopPolicy::Retire));

    let pong = runtime.create(
        ActorId::ROOT,
        Some("pong"),
        Player {
            partner: None,
            limit: 10,
        },
        None,
    );
    runtime.create(
        ActorId::ROOT,
        Some("ping"),
        Player {
            partner: None,
            limit: 10,
        },
        Rally::Partner(pong),
    );

    let handled = runtime.try_drain_all()?;
    println!("Done after {handled} messages");
    Ok(())
}
