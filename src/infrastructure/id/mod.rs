use chrono::Utc;
use parking_lot::Mutex;

// 2020-01-01T00:00:00Z
const EPOCH_MS: i64 = 1_577_836_800_000;
const NODE_BITS: u8 = 10;
const SEQ_BITS: u8 = 12;
const MAX_SEQ: u16 = (1 << SEQ_BITS) - 1;

/// Snowflake-style id generator: 41 bits of milliseconds since a custom
/// epoch, 10 bits of node id, 12 bits of per-millisecond sequence. Ids are
/// unique per node and strictly increasing in allocation order.
pub struct IdGenerator {
    node_id: i64,
    state: Mutex<GeneratorState>,
}

struct GeneratorState {
    last_ms: i64,
    seq: u16,
}

impl IdGenerator {
    pub fn new(node_id: u16) -> Self {
        Self {
            node_id: i64::from(node_id & ((1 << NODE_BITS) - 1)),
            state: Mutex::new(GeneratorState { last_ms: 0, seq: 0 }),
        }
    }

    pub fn next_id(&self) -> i64 {
        let mut state = self.state.lock();
        let mut now = Utc::now().timestamp_millis() - EPOCH_MS;

        // Never move backwards, even if the wall clock does
        if now < state.last_ms {
            now = state.last_ms;
        }

        if now == state.last_ms {
            if state.seq == MAX_SEQ {
                // Sequence exhausted, borrow the next millisecond
                state.last_ms += 1;
                state.seq = 0;
            } else {
                state.seq += 1;
            }
        } else {
            state.last_ms = now;
            state.seq = 0;
        }

        (state.last_ms << (NODE_BITS + SEQ_BITS))
            | (self.node_id << SEQ_BITS)
            | i64::from(state.seq)
    }
}
