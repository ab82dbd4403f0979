//! Decoder preferences. Each option documents its effect and its default.

use std::collections::BTreeMap;

use crate::factory::HostFactories;
use crate::value::DecoderValue;

/// Configuration options for the BJData/UBJSON decoder.
///
/// Generic over the same [`HostFactories`] implementation passed to
/// [`crate::decode_value`], since the object hooks below receive and return
/// fully decoded [`DecoderValue`]s.
///
/// # Default
///
/// Endianness defaults to big-endian (network order, UBJSON-compliant); all
/// other options default to `false`/unset.
pub struct DecoderOptions<H: HostFactories> {
    /// Called on each decoded object in the default (mapping) emission mode.
    /// The hook receives the fully decoded mapping and returns the value to
    /// substitute for it.
    ///
    /// A `None` value is equivalent to "unset".
    pub object_hook: Option<Box<dyn FnMut(BTreeMap<String, DecoderValue<H>>) -> DecoderValue<H>>>,

    /// If set, objects are decoded in pair-preserving mode: an ordered
    /// sequence of `(key, value)` pairs (duplicates included) is built and
    /// passed to this hook instead of a mapping. Takes precedence over
    /// `object_hook` when both are set.
    ///
    /// A `None` value is equivalent to "unset".
    pub object_pairs_hook:
        Option<Box<dyn FnMut(Vec<(String, DecoderValue<H>)>) -> DecoderValue<H>>>,

    /// If `true`, counted `U` (uint8) arrays decode to a list of integers
    /// instead of a byte vector.
    ///
    /// # Default
    ///
    /// `false`
    pub no_bytes: bool,

    /// If `true`, each decoded object key is passed through
    /// [`HostFactories::intern_key`](crate::HostFactories::intern_key) before
    /// it is stored. This crate does not itself maintain a string table; the
    /// host decides what, if anything, to do with the request.
    ///
    /// # Default
    ///
    /// `false`
    pub intern_object_keys: bool,

    /// Endianness for multi-byte numerics. `true` selects little-endian;
    /// `false` selects big-endian (network order).
    ///
    /// # Default
    ///
    /// `false` (big-endian, UBJSON-compliant)
    pub islittle: bool,
}

impl<H: HostFactories> Default for DecoderOptions<H> {
    fn default() -> Self {
        Self {
            object_hook: None,
            object_pairs_hook: None,
            no_bytes: false,
            intern_object_keys: false,
            islittle: false,
        }
    }
}

impl<H: HostFactories> core::fmt::Debug for DecoderOptions<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DecoderOptions")
            .field("object_hook", &self.object_hook.is_some())
            .field("object_pairs_hook", &self.object_pairs_hook.is_some())
            .field("no_bytes", &self.no_bytes)
            .field("intern_object_keys", &self.intern_object_keys)
            .field("islittle", &self.islittle)
            .finish()
    }
}
