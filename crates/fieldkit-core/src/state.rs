use thiserror::Error;

/// The two flags a password field persists across configuration changes,
/// appended to the host's opaque snapshot as two single-byte fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedState {
   pub icon_showing: bool,
   pub password_visible: bool,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StateError {
   #[error("saved state too short: expected at least 2 trailing bytes, got {0}")]
   Truncated(usize),
   #[error("saved state flag byte is not a boolean: {0:#04x}")]
   InvalidFlag(u8),
}

impl SavedState {
   /// Append the two flags after the host's opaque snapshot.
   pub fn write_to(&self, host_snapshot: &[u8]) -> Vec<u8> {
      let mut out = Vec::with_capacity(host_snapshot.len() + 2);
      out.extend_from_slice(host_snapshot);
      out.push(u8::from(self.icon_showing));
      out.push(u8::from(self.password_visible));
      out
   }

   /// Split the two trailing flag bytes back off, returning the host
   /// portion. A snapshot that is too short or carries non-boolean flag
   /// bytes is rejected outright; there is no recovery default.
   pub fn read_from(bytes: &[u8]) -> Result<(Self, &[u8]), StateError> {
      if bytes.len() < 2 {
         return Err(StateError::Truncated(bytes.len()));
      }
      let (host, flags) = bytes.split_at(bytes.len() - 2);
      let saved = Self {
         icon_showing: flag(flags[0])?,
         password_visible: flag(flags[1])?,
      };
      Ok((saved, host))
   }
}

fn flag(byte: u8) -> Result<bool, StateError> {
   match byte {
      0 => Ok(false),
      1 => Ok(true),
      other => Err(StateError::InvalidFlag(other)),
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn round_trip_preserves_flags_and_host_snapshot() {
      let host = b"opaque superclass state";
      let saved = SavedState {
         icon_showing: true,
         password_visible: false,
      };
      let bytes = saved.write_to(host);
      assert_eq!(bytes.len(), host.len() + 2);

      let (restored, remaining) = SavedState::read_from(&bytes).unwrap();
      assert_eq!(restored, saved);
      assert_eq!(remaining, host);
   }

   #[test]
   fn all_flag_combinations_round_trip() {
      for icon_showing in [false, true] {
         for password_visible in [false, true] {
            let saved = SavedState {
               icon_showing,
               password_visible,
            };
            let (restored, _) = SavedState::read_from(&saved.write_to(&[])).unwrap();
            assert_eq!(restored, saved);
         }
      }
   }

   #[test]
   fn truncated_snapshot_is_rejected() {
      assert_eq!(SavedState::read_from(&[]), Err(StateError::Truncated(0)));
      assert_eq!(SavedState::read_from(&[1]), Err(StateError::Truncated(1)));
   }

   #[test]
   fn non_boolean_flag_byte_is_rejected() {
      assert_eq!(
         SavedState::read_from(&[0, 2]),
         Err(StateError::InvalidFlag(2))
      );
      assert_eq!(
         SavedState::read_from(&[0xff, 1]),
         Err(StateError::InvalidFlag(0xff))
      );
   }
}
