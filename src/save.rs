//! Minimal mid-run persistence: enough to resume a battle, nothing more.
//!
//! The snapshot carries the rosters (with health and effect ledgers), the
//! wallet, and the phase bookkeeping. Grid contents and the current spin
//! result are deliberately excluded; a resumed run starts from the pending
//! phase with a fresh reel.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::core::config::GameConfig;
use crate::economy::Wallet;
use crate::engine::turn::{TurnEngine, TurnPhase};
use crate::units::roster::Roster;

const SNAPSHOT_VERSION_MAGIC: u64 = 0x52454C_42_4E44_0001;

/// Everything needed to resume a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSnapshot {
    pub player: Roster,
    pub enemy: Roster,
    pub wallet: Wallet,
    pub phase: TurnPhase,
    pub spins_this_turn: u32,
    pub round: u32,
}

impl RunSnapshot {
    pub fn capture(engine: &TurnEngine, wallet: &Wallet) -> Self {
        let (player, enemy, phase, spins_this_turn, round) = engine.snapshot_parts();
        Self {
            player,
            enemy,
            wallet: wallet.clone(),
            phase,
            spins_this_turn,
            round,
        }
    }

    /// Rebuilds the engine and wallet. The grid comes back empty; the
    /// engine re-fills it on the next spin phase.
    pub fn restore(self, config: GameConfig) -> (TurnEngine, Wallet) {
        let engine = TurnEngine::from_parts(
            self.player,
            self.enemy,
            self.phase,
            self.spins_this_turn,
            self.round,
            config,
        );
        (engine, self.wallet)
    }
}

/// Saves and loads snapshots with checksum verification.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "reelbound").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "could not determine config directory")
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join("run.dat"),
        })
    }

    /// For tests and tools that manage their own paths.
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    /// File format:
    /// - version magic (8 bytes)
    /// - data length (4 bytes)
    /// - serialized snapshot (variable length)
    /// - SHA-256 checksum over the three fields above (32 bytes)
    pub fn save(&self, snapshot: &RunSnapshot) -> io::Result<()> {
        let data = bincode::serialize(snapshot)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let data_len = data.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(SNAPSHOT_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SNAPSHOT_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;
        Ok(())
    }

    pub fn load(&self) -> io::Result<RunSnapshot> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut magic_bytes = [0u8; 8];
        file.read_exact(&mut magic_bytes)?;
        if u64::from_le_bytes(magic_bytes) != SNAPSHOT_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "unrecognized snapshot version",
            ));
        }

        let mut len_bytes = [0u8; 4];
        file.read_exact(&mut len_bytes)?;
        let data_len = u32::from_le_bytes(len_bytes) as usize;

        let mut data = vec![0u8; data_len];
        file.read_exact(&mut data)?;

        let mut checksum = [0u8; 32];
        file.read_exact(&mut checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(magic_bytes);
        hasher.update(len_bytes);
        hasher.update(&data);
        if hasher.finalize().as_slice() != checksum {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "snapshot checksum mismatch",
            ));
        }

        bincode::deserialize(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    pub fn delete_save(&self) -> io::Result<()> {
        if self.save_path.exists() {
            fs::remove_file(&self.save_path)?;
        }
        Ok(())
    }
}
