//! Per-channel, per-direction AES-128 keys.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Number of logically independent packet streams multiplexed over the
/// transport. Shared with the packet-framing layer outside this core; both
/// peers MUST agree on this value (spec.md §3, §9 Open Questions).
pub const N_CHANNELS: usize = 3;

/// One AES-128 key per channel, per direction. Zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ChannelKeys {
    pub client_send: [[u8; 16]; N_CHANNELS],
    pub server_send: [[u8; 16]; N_CHANNELS],
}

impl ChannelKeys {
    /// Slices `client_send_keys`/`server_send_keys` byte-positionally:
    /// channel `i` uses bytes `[16i, 16i+16)` (spec.md §4.3).
    pub(crate) fn from_expanded(client_send_keys: &[u8], server_send_keys: &[u8]) -> Self {
        debug_assert_eq!(client_send_keys.len(), N_CHANNELS * 16);
        debug_assert_eq!(server_send_keys.len(), N_CHANNELS * 16);

        let mut client_send = [[0u8; 16]; N_CHANNELS];
        let mut server_send = [[0u8; 16]; N_CHANNELS];
        for i in 0..N_CHANNELS {
            client_send[i].copy_from_slice(&client_send_keys[i * 16..i * 16 + 16]);
            server_send[i].copy_from_slice(&server_send_keys[i * 16..i * 16 + 16]);
        }
        Self {
            client_send,
            server_send,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_are_sliced_in_byte_order() {
        let mut client = vec![0u8; N_CHANNELS * 16];
        let mut server = vec![0u8; N_CHANNELS * 16];
        for (i, b) in client.iter_mut().enumerate() {
            *b = i as u8;
        }
        for (i, b) in server.iter_mut().enumerate() {
            *b = 0x80 ^ (i as u8);
        }

        let keys = ChannelKeys::from_expanded(&client, &server);
        for ch in 0..N_CHANNELS {
            assert_eq!(keys.client_send[ch], client[ch * 16..ch * 16 + 16]);
            assert_eq!(keys.server_send[ch], server[ch * 16..ch * 16 + 16]);
        }
    }
}
