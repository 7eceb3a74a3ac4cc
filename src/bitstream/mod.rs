//! The bitstream module forms the I/O subsystem of the codec.
//!
//! Every stage exchanges bits through a `BitVec`: an appendable, indexable sequence of bits
//! packed most significant bit first. The packed bytes are exactly what is written to disk, with
//! zeros padding out the final byte.
//!
//! `BitReader` walks a `BitVec` field by field. All container fields are variable length, so the
//! reader tracks the bit position rather than a byte cursor.
//!
pub mod bitreader;
pub mod bitvec;
