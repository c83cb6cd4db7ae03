use crate::error::{Error, Result};
use chacha20::ChaCha20;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use zeroize::Zeroizing;

const KEYSTREAM_BUFFER_LEN: usize = 1024;

/// Uniform index sampling from a cryptographically secure source.
pub trait RandomSource {
    /// Returns an index uniformly distributed in `[0, n)`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    fn next_index(&mut self, n: usize) -> usize;
}

/// ChaCha20 keystream consumed with unbiased rejection sampling.
pub struct ChaChaSource {
    cipher: ChaCha20,
    buffer: Zeroizing<Vec<u8>>,
    pos: usize,
}

impl ChaChaSource {
    /// Seeds key and nonce from the operating system CSPRNG.
    pub fn from_os() -> Result<Self> {
        let mut key = Zeroizing::new([0u8; 32]);
        let mut nonce = [0u8; 12];

        getrandom::fill(&mut key[..])
            .and_then(|()| getrandom::fill(&mut nonce))
            .map_err(|e| Error::RandomnessUnavailable(e.to_string()))?;

        tracing::debug!("seeded ChaCha20 keystream from the operating system");
        Ok(Self::with_nonce(&key, &nonce))
    }

    /// Reproducible stream for a caller-supplied 256-bit key.
    pub fn from_key(key: &[u8; 32]) -> Self {
        Self::with_nonce(key, &[0u8; 12])
    }

    fn with_nonce(key: &[u8; 32], nonce: &[u8; 12]) -> Self {
        let mut cipher = ChaCha20::new(key.into(), &(*nonce).into());
        let mut buffer = Zeroizing::new(vec![0u8; KEYSTREAM_BUFFER_LEN]);
        cipher.apply_keystream(&mut buffer);

        Self {
            cipher,
            buffer,
            pos: 0,
        }
    }

    fn next_u64(&mut self) -> u64 {
        if self.pos + 8 > self.buffer.len() {
            self.buffer.fill(0);
            self.cipher.apply_keystream(&mut self.buffer);
            self.pos = 0;
        }

        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.buffer[self.pos..self.pos + 8]);
        self.pos += 8;
        u64::from_le_bytes(bytes)
    }
}

impl RandomSource for ChaChaSource {
    fn next_index(&mut self, n: usize) -> usize {
        assert!(n > 0, "cannot sample from an empty range");
        if n == 1 {
            return 0;
        }

        let n = n as u64;
        let rejection_threshold = (u64::MAX / n) * n;

        loop {
            let random_u64 = self.next_u64();
            if random_u64 < rejection_threshold {
                return (random_u64 % n) as usize;
            }
        }
    }
}

/// Replays a fixed script of indexes, wrapping each into range.
#[cfg(test)]
pub(crate) struct ScriptedSource {
    script: Vec<usize>,
    pos: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new(script: Vec<usize>) -> Self {
        Self { script, pos: 0 }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn next_index(&mut self, n: usize) -> usize {
        let value = self.script[self.pos % self.script.len()];
        self.pos += 1;
        value % n
    }
}
