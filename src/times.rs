use bitflags::bitflags;

bitflags! {
    /// The set of file timestamps an update touches.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TimeFields: u8 {
        /// The creation (birth) timestamp.
        const BTIME = 1;
        /// The last modification timestamp.
        const MTIME = 2;
        /// The last access timestamp.
        const ATIME = 4;
    }
}

/// A selective timestamp update, with times expressed in milliseconds since
/// the Unix epoch.
///
/// Timestamps the update doesn't set keep their current values on the
/// filesystem object, and an update which sets nothing at all is a no-op
/// that always succeeds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Utimes {
    fields: TimeFields,
    btime: i64,
    mtime: i64,
    atime: i64,
}

impl Utimes {
    /// Construct an update which touches no timestamps.
    pub const fn new() -> Self {
        Self {
            fields: TimeFields::empty(),
            btime: 0,
            mtime: 0,
            atime: 0,
        }
    }

    /// Construct an update which sets all three timestamps to the same time.
    pub const fn all(millis: i64) -> Self {
        Self {
            fields: TimeFields::all(),
            btime: millis,
            mtime: millis,
            atime: millis,
        }
    }

    /// Construct an update from a field mask and raw timestamp values.
    ///
    /// Values whose corresponding field bit is clear are discarded, so they
    /// can't influence the update or comparisons between updates.
    pub const fn from_parts(fields: TimeFields, btime: i64, mtime: i64, atime: i64) -> Self {
        Self {
            fields,
            btime: if fields.contains(TimeFields::BTIME) {
                btime
            } else {
                0
            },
            mtime: if fields.contains(TimeFields::MTIME) {
                mtime
            } else {
                0
            },
            atime: if fields.contains(TimeFields::ATIME) {
                atime
            } else {
                0
            },
        }
    }

    /// Set the creation timestamp.
    pub const fn set_btime(mut self, millis: i64) -> Self {
        self.fields = self.fields.union(TimeFields::BTIME);
        self.btime = millis;
        self
    }

    /// Set the last modification timestamp.
    pub const fn set_mtime(mut self, millis: i64) -> Self {
        self.fields = self.fields.union(TimeFields::MTIME);
        self.mtime = millis;
        self
    }

    /// Set the last access timestamp.
    pub const fn set_atime(mut self, millis: i64) -> Self {
        self.fields = self.fields.union(TimeFields::ATIME);
        self.atime = millis;
        self
    }

    /// The creation timestamp, if this update sets one.
    pub const fn btime(&self) -> Option<i64> {
        if self.fields.contains(TimeFields::BTIME) {
            Some(self.btime)
        } else {
            None
        }
    }

    /// The last modification timestamp, if this update sets one.
    pub const fn mtime(&self) -> Option<i64> {
        if self.fields.contains(TimeFields::MTIME) {
            Some(self.mtime)
        } else {
            None
        }
    }

    /// The last access timestamp, if this update sets one.
    pub const fn atime(&self) -> Option<i64> {
        if self.fields.contains(TimeFields::ATIME) {
            Some(self.atime)
        } else {
            None
        }
    }

    /// The set of fields this update touches.
    pub const fn fields(&self) -> TimeFields {
        self.fields
    }

    /// Whether this update touches no fields at all.
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_bit_values() {
        assert_eq!(TimeFields::BTIME.bits(), 1);
        assert_eq!(TimeFields::MTIME.bits(), 2);
        assert_eq!(TimeFields::ATIME.bits(), 4);
    }

    #[test]
    fn new_is_empty() {
        let update = Utimes::new();
        assert!(update.is_empty());
        assert_eq!(update.btime(), None);
        assert_eq!(update.mtime(), None);
        assert_eq!(update.atime(), None);
    }

    #[test]
    fn builders_set_fields_and_values() {
        let update = Utimes::new().set_mtime(5_000).set_atime(6_000);
        assert_eq!(update.fields(), TimeFields::MTIME | TimeFields::ATIME);
        assert_eq!(update.btime(), None);
        assert_eq!(update.mtime(), Some(5_000));
        assert_eq!(update.atime(), Some(6_000));
        assert!(!update.is_empty());
    }

    #[test]
    fn all_sets_every_field_to_the_same_time() {
        let update = Utimes::all(42);
        assert_eq!(update.fields(), TimeFields::all());
        assert_eq!(update.btime(), Some(42));
        assert_eq!(update.mtime(), Some(42));
        assert_eq!(update.atime(), Some(42));
    }

    #[test]
    fn from_parts_discards_values_behind_clear_bits() {
        let update = Utimes::from_parts(TimeFields::MTIME, 111, 222, 333);
        assert_eq!(update.btime(), None);
        assert_eq!(update.mtime(), Some(222));
        assert_eq!(update.atime(), None);
        assert_eq!(update, Utimes::new().set_mtime(222));
    }
}
