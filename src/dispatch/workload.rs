//! Workload generation.
//!
//! Each benchmark session materializes its workload once, up front, so
//! construction cost is never attributed to the dispatch being measured.
//! All generators draw exactly one uniform variant selection per element
//! from a xoroshiro128++ stream, which makes the different representations
//! built from the same seed carry identical logical content: the value and
//! payload workloads agree element for element, as do the family and
//! sealed instruction workloads.
//!
//! A requested count of zero is a benign degenerate case and yields an
//! empty workload, not an error.

use crate::dispatch::instr::{Bar, Baz, Foo, FooBar, InstrKind, Instruction, SealedInstr};
use crate::dispatch::payload::{self, Payload};
use crate::dispatch::value::Value;
use crate::utils::bench::Xoroshiro128PlusPlus;

/// One element of the opcode-table workload: a small integer opcode and a
/// same-variant operand pair. Opcode order follows `ValueKind::ALL`
/// (0 int, 1 float, 2 double, 3 text).
pub struct TableInstr {
    pub opcode: u8,
    pub lhs: Value,
    pub rhs: Value,
}

fn next_instr(rng: &mut Xoroshiro128PlusPlus) -> TableInstr {
    let opcode = rng.next_u32_range(4) as u8;
    let (lhs, rhs) = match opcode {
        0 => (Value::Int(rng.next_i32()), Value::Int(rng.next_i32())),
        1 => (
            Value::Float(rng.next_f32_unit()),
            Value::Float(rng.next_f32_unit()),
        ),
        2 => (
            Value::Double(rng.next_f64_unit()),
            Value::Double(rng.next_f64_unit()),
        ),
        _ => (
            Value::Text("Hello".to_string()),
            Value::Text("World".to_string()),
        ),
    };
    TableInstr { opcode, lhs, rhs }
}

/// Workload for the strategies operating on plain values.
pub fn table_instrs(count: usize, seed: u64) -> Vec<TableInstr> {
    let mut rng = Xoroshiro128PlusPlus::new(seed);
    (0..count).map(|_| next_instr(&mut rng)).collect()
}

/// Workload for the strategies operating on boxed payloads. Same logical
/// content as `table_instrs` for the same seed.
pub fn payload_pairs(count: usize, seed: u64) -> Vec<(Box<dyn Payload>, Box<dyn Payload>)> {
    let mut rng = Xoroshiro128PlusPlus::new(seed);
    (0..count)
        .map(|_| {
            let instr = next_instr(&mut rng);
            (payload::from_value(&instr.lhs), payload::from_value(&instr.rhs))
        })
        .collect()
}

fn next_kind(rng: &mut Xoroshiro128PlusPlus) -> InstrKind {
    InstrKind::ALL[rng.next_u32_range(4) as usize]
}

/// Instruction workload in the family (trait object) representation.
pub fn family_instrs(count: usize, seed: u64) -> Vec<Box<dyn Instruction>> {
    let mut rng = Xoroshiro128PlusPlus::new(seed);
    (0..count)
        .map(|_| -> Box<dyn Instruction> {
            match next_kind(&mut rng) {
                InstrKind::Foo => Box::new(Foo),
                InstrKind::Bar => Box::new(Bar),
                InstrKind::Baz => Box::new(Baz),
                InstrKind::FooBar => Box::new(FooBar),
            }
        })
        .collect()
}

/// Instruction workload in the sealed (closed enum) representation. Same
/// kind sequence as `family_instrs` for the same seed.
pub fn sealed_instrs(count: usize, seed: u64) -> Vec<SealedInstr> {
    let mut rng = Xoroshiro128PlusPlus::new(seed);
    (0..count)
        .map(|_| match next_kind(&mut rng) {
            InstrKind::Foo => SealedInstr::Foo(Foo),
            InstrKind::Bar => SealedInstr::Bar(Bar),
            InstrKind::Baz => SealedInstr::Baz(Baz),
            InstrKind::FooBar => SealedInstr::FooBar(FooBar),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_count_yields_empty() {
        assert!(table_instrs(0, 1234).is_empty());
        assert!(payload_pairs(0, 1234).is_empty());
        assert!(family_instrs(0, 1234).is_empty());
        assert!(sealed_instrs(0, 1234).is_empty());
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let a = table_instrs(1000, 42);
        let b = table_instrs(1000, 42);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.opcode, y.opcode);
            assert_eq!(x.lhs, y.lhs);
            assert_eq!(x.rhs, y.rhs);
        }

        let f1 = family_instrs(1000, 42);
        let f2 = family_instrs(1000, 42);
        assert!(f1.iter().zip(&f2).all(|(x, y)| x.kind() == y.kind()));
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = table_instrs(1000, 1);
        let b = table_instrs(1000, 2);
        assert!(a.iter().zip(&b).any(|(x, y)| x.lhs != y.lhs));
    }

    #[test]
    fn test_operands_share_the_opcode_variant() {
        for instr in table_instrs(4096, 7) {
            assert!(instr.opcode < 4);
            assert_eq!(instr.lhs.kind(), instr.rhs.kind());
            assert_eq!(instr.lhs.combine(&instr.rhs).unwrap().kind(), instr.lhs.kind());
        }
    }

    #[test]
    fn test_representations_agree_for_the_same_seed() {
        let values = table_instrs(512, 99);
        let pairs = payload_pairs(512, 99);
        for (v, (lhs, rhs)) in values.iter().zip(&pairs) {
            assert_eq!(lhs.to_value(), v.lhs);
            assert_eq!(rhs.to_value(), v.rhs);
        }

        let family = family_instrs(512, 99);
        let sealed = sealed_instrs(512, 99);
        for (f, s) in family.iter().zip(&sealed) {
            assert_eq!(f.kind(), s.kind());
        }
    }

    #[test]
    fn test_uniform_variant_selection() {
        const N: usize = 1_000_000;
        let mut counts = [0usize; 4];
        for instr in sealed_instrs(N, 0xD15EA5E) {
            counts[InstrKind::ALL.iter().position(|k| *k == instr.kind()).unwrap()] += 1;
        }

        let expected = N / 4;
        let tolerance = N / 100;
        for (kind, count) in InstrKind::ALL.iter().zip(counts) {
            assert!(
                count.abs_diff(expected) <= tolerance,
                "kind {} appeared {} times, expected {} +/- {}",
                kind,
                count,
                expected,
                tolerance
            );
        }
    }
}
