//! Synthetic BrainVision recordings for tests and demos.

use crate::extension::BrainVisionMember;
use crate::{FilesError, FilesResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Parameters for a synthetic BrainVision recording.
///
/// The recording holds `n_channels` channels of Gaussian noise (scaled by 100) stored as
/// multiplexed little-endian `f32`, and one `Stimulus/S1` marker per second placed half a second
/// into that second.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticRecording {
    /// Shared basename of the `.vhdr`, `.eeg` and `.vmrk` files
    pub basename: String,
    /// Number of channels, labelled `chan1..=chanN`
    pub n_channels: usize,
    /// Sampling frequency in Hz
    pub sampling_frequency: f64,
    /// Recording duration in whole seconds
    pub duration_secs: u32,
    /// Seed for the noise generator; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for SyntheticRecording {
    fn default() -> Self {
        Self {
            basename: "test".into(),
            n_channels: 2,
            sampling_frequency: 1000.0,
            duration_secs: 10,
            seed: None,
        }
    }
}

impl SyntheticRecording {
    /// Number of samples per channel.
    pub fn n_samples(&self) -> usize {
        (f64::from(self.duration_secs) * self.sampling_frequency) as usize
    }

    /// Writes the three members into `output_dir` and returns the header path.
    ///
    /// `output_dir` must already exist.
    ///
    /// # Errors
    ///
    /// Returns [`FilesError::InvalidPath`] for an empty basename or a non-positive sampling
    /// frequency, and [`FilesError::Io`] if any member cannot be written.
    pub fn write(&self, output_dir: &Path) -> FilesResult<PathBuf> {
        if self.basename.is_empty() {
            return Err(FilesError::InvalidPath("basename cannot be empty".into()));
        }
        if self.sampling_frequency.is_nan() || self.sampling_frequency <= 0.0 {
            return Err(FilesError::InvalidPath(format!(
                "sampling frequency must be positive, got {}",
                self.sampling_frequency
            )));
        }

        let vhdr = self.member_path(output_dir, BrainVisionMember::Header);
        write_file(&vhdr, self.header().as_bytes())?;

        let eeg = self.member_path(output_dir, BrainVisionMember::Data);
        self.write_data(&eeg)?;

        let vmrk = self.member_path(output_dir, BrainVisionMember::Marker);
        write_file(&vmrk, self.markers().as_bytes())?;

        tracing::info!(
            "wrote synthetic BrainVision recording {} ({} channels, {} samples)",
            vhdr.display(),
            self.n_channels,
            self.n_samples()
        );
        Ok(vhdr)
    }

    fn member_path(&self, output_dir: &Path, member: BrainVisionMember) -> PathBuf {
        output_dir.join(format!("{}{}", self.basename, member.extension()))
    }

    fn header(&self) -> String {
        let sampling_interval_us = (1.0 / self.sampling_frequency * 1000.0 * 1000.0) as i64;

        let mut out = String::new();
        out.push_str("Brain Vision Data Exchange Header File Version 1.0\n");
        out.push_str("\n[Common Infos]\n");
        out.push_str(&format!("DataFile={}.eeg\n", self.basename));
        out.push_str(&format!("MarkerFile={}.vmrk\n", self.basename));
        out.push_str("DataFormat=BINARY\n");
        out.push_str("Data orientation: MULTIPLEXED=ch1,pt1, ch2,pt1 ...\n");
        out.push_str("DataOrientation=MULTIPLEXED\n");
        out.push_str(&format!("NumberOfChannels={}\n", self.n_channels));
        out.push_str(&format!("SamplingInterval={}\n", sampling_interval_us));
        out.push_str("\n[Binary Infos]\n");
        out.push_str("BinaryFormat=IEEE_FLOAT_32\n");
        out.push_str("\n[Channel Infos]\n");
        for channel in 1..=self.n_channels {
            out.push_str(&format!("Ch{0}=chan{0},,0.1\n", channel));
        }
        out
    }

    fn markers(&self) -> String {
        let mut out = String::new();
        out.push_str("Brain Vision Data Exchange Marker File, Version 1.0\n");
        out.push_str("\n[Common Infos]\n");
        out.push_str(&format!("DataFile={}.eeg\n", self.basename));
        out.push_str("\n[Marker Infos]\n");
        for second in 0..self.duration_secs {
            let onset = (f64::from(second) * self.sampling_frequency
                + 0.5 * self.sampling_frequency) as i64;
            out.push_str(&format!("Mk{}=Stimulus,S1,{},1,0\n", second + 1, onset));
        }
        out
    }

    fn write_data(&self, path: &Path) -> FilesResult<()> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let file = fs::File::create(path).map_err(|e| write_error(path, e))?;
        let mut writer = BufWriter::new(file);
        // Multiplexed: all channels of sample 0, then all channels of sample 1, ...
        for _ in 0..self.n_samples() {
            for _ in 0..self.n_channels {
                let value = (100.0 * standard_normal(&mut rng)) as f32;
                writer.write_all(&value.to_le_bytes())?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}

/// Box-Muller draw from N(0, 1).
fn standard_normal(rng: &mut impl Rng) -> f64 {
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

fn write_file(path: &Path, content: &[u8]) -> FilesResult<()> {
    fs::write(path, content).map_err(|e| write_error(path, e))
}

fn write_error(path: &Path, e: io::Error) -> FilesError {
    FilesError::Io(io::Error::new(
        e.kind(),
        format!("Failed to write file to {}: {}", path.display(), e),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn small(seed: u64) -> SyntheticRecording {
        SyntheticRecording {
            basename: "sample".into(),
            n_channels: 3,
            sampling_frequency: 100.0,
            duration_secs: 2,
            seed: Some(seed),
        }
    }

    #[test]
    fn test_write_creates_all_members() {
        let temp = TempDir::new().unwrap();
        let vhdr = small(1).write(temp.path()).unwrap();

        assert_eq!(vhdr, temp.path().join("sample.vhdr"));
        assert!(temp.path().join("sample.eeg").is_file());
        assert!(temp.path().join("sample.vmrk").is_file());
    }

    #[test]
    fn test_header_content() {
        let temp = TempDir::new().unwrap();
        let vhdr = small(1).write(temp.path()).unwrap();
        let header = fs::read_to_string(vhdr).unwrap();

        assert!(header.starts_with("Brain Vision Data Exchange Header File Version 1.0\n"));
        assert!(header.contains("\nDataFile=sample.eeg\n"));
        assert!(header.contains("\nMarkerFile=sample.vmrk\n"));
        assert!(header.contains("\nNumberOfChannels=3\n"));
        assert!(header.contains("\nSamplingInterval=10000\n"));
        assert!(header.contains("\nCh3=chan3,,0.1\n"));
        assert!(!header.contains("Ch4="));
    }

    #[test]
    fn test_marker_content() {
        let temp = TempDir::new().unwrap();
        small(1).write(temp.path()).unwrap();
        let markers = fs::read_to_string(temp.path().join("sample.vmrk")).unwrap();

        assert!(markers.contains("\nDataFile=sample.eeg\n"));
        assert!(markers.contains("\nMk1=Stimulus,S1,50,1,0\n"));
        assert!(markers.contains("\nMk2=Stimulus,S1,150,1,0\n"));
        assert!(!markers.contains("Mk3="));
    }

    #[test]
    fn test_data_size_and_determinism() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("a");
        let second = temp.path().join("b");
        fs::create_dir(&first).unwrap();
        fs::create_dir(&second).unwrap();

        small(42).write(&first).unwrap();
        small(42).write(&second).unwrap();

        let a = fs::read(first.join("sample.eeg")).unwrap();
        let b = fs::read(second.join("sample.eeg")).unwrap();
        assert_eq!(a.len(), 3 * 200 * 4);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let temp = TempDir::new().unwrap();
        let mut recording = small(1);
        recording.sampling_frequency = 0.0;
        assert!(matches!(
            recording.write(temp.path()),
            Err(FilesError::InvalidPath(_))
        ));

        let recording = SyntheticRecording {
            basename: String::new(),
            ..SyntheticRecording::default()
        };
        assert!(recording.write(temp.path()).is_err());
    }

    #[test]
    fn test_default_matches_reference_recording() {
        let recording = SyntheticRecording::default();
        assert_eq!(recording.basename, "test");
        assert_eq!(recording.n_channels, 2);
        assert_eq!(recording.n_samples(), 10_000);
    }
}
