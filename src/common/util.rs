//! Auxiliary functions on limbs and unsigned limb slices.

use crate::common::buf::LimbBuf;
use crate::defs::{DoubleLimb, Limb, LIMB_BIT_SIZE};
use core::cmp::Ordering;
use itertools::izip;

#[inline(always)]
pub fn add_carry(a: Limb, b: Limb, c: Limb, r: &mut Limb) -> Limb {
    #[cfg(target_arch = "x86_64")]
    {
        // platform-specific operation
        unsafe { core::arch::x86_64::_addcarry_u64(c as u8, a, b, r) as Limb }
    }

    #[cfg(not(target_arch = "x86_64"))]
    {
        use crate::defs::LIMB_BASE;

        let mut s = c as DoubleLimb + a as DoubleLimb + b as DoubleLimb;
        if s >= LIMB_BASE {
            s -= LIMB_BASE;
            *r = s as Limb;
            1
        } else {
            *r = s as Limb;
            0
        }
    }
}

#[inline(always)]
pub fn sub_borrow(a: Limb, b: Limb, c: Limb, r: &mut Limb) -> Limb {
    #[cfg(target_arch = "x86_64")]
    {
        // platform-specific operation
        unsafe { core::arch::x86_64::_subborrow_u64(c as u8, a, b, r) as Limb }
    }

    #[cfg(not(target_arch = "x86_64"))]
    {
        use crate::defs::LIMB_BASE;

        let v1 = a as DoubleLimb;
        let v2 = b as DoubleLimb + c as DoubleLimb;

        if v1 < v2 {
            *r = (v1 + LIMB_BASE - v2) as Limb;
            1
        } else {
            *r = (v1 - v2) as Limb;
            0
        }
    }
}

/// Number of significant bits in the unsigned number `m`.
pub fn bit_len(m: &[Limb]) -> usize {
    for (i, v) in m.iter().enumerate().rev() {
        if *v != 0 {
            return i * LIMB_BIT_SIZE + LIMB_BIT_SIZE - v.leading_zeros() as usize;
        }
    }
    0
}

/// Length of `m` without the most significant zero limbs.
#[inline]
pub fn significant_len(m: &[Limb]) -> usize {
    m.iter().rposition(|v| *v != 0).map_or(0, |i| i + 1)
}

/// Compare unsigned numbers `a` and `b`.
pub fn cmp_slices(a: &[Limb], b: &[Limb]) -> Ordering {
    let a = &a[..significant_len(a)];
    let b = &b[..significant_len(b)];

    match a.len().cmp(&b.len()) {
        Ordering::Equal => {}
        ord => return ord,
    }

    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        match x.cmp(y) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }

    Ordering::Equal
}

/// Shift unsigned `m` left by one bit, placing `bit` into the least significant position.
pub fn shl1_inject(m: &mut LimbBuf, bit: Limb) {
    let mut carry = bit;
    for v in m.iter_mut() {
        let next = *v >> (LIMB_BIT_SIZE - 1);
        *v = (*v << 1) | carry;
        carry = next;
    }
    if carry != 0 {
        m.push_back(carry);
    }
}

/// Subtract unsigned `b` from unsigned `a` in place. Requires `a >= b`.
pub fn sub_slices_assign(a: &mut [Limb], b: &[Limb]) {
    let mut c = 0;
    let mut iter = a.iter_mut();
    for (x, y) in iter.by_ref().zip(b.iter()) {
        c = sub_borrow(*x, *y, c, x);
    }
    for x in iter {
        if c == 0 {
            break;
        }
        c = sub_borrow(*x, 0, c, x);
    }
    debug_assert!(c == 0);
}

/// Add unsigned `src` shifted left by `shift` bits to unsigned `acc` in place.
/// `acc` must be long enough to hold the result.
pub fn add_shifted_assign(acc: &mut [Limb], src: &[Limb], shift: usize) {
    let idx = shift / LIMB_BIT_SIZE;
    let bits = shift % LIMB_BIT_SIZE;

    let mut prev: Limb = 0;
    let mut c = 0;
    let mut dst = acc[idx..].iter_mut();

    for (a, d) in izip!(src.iter(), dst.by_ref()) {
        let v = if bits == 0 {
            *a
        } else {
            (*a << bits) | (prev >> (LIMB_BIT_SIZE - bits))
        };
        prev = *a;
        c = add_carry(*d, v, c, d);
    }

    let mut tail = if bits == 0 {
        0
    } else {
        prev >> (LIMB_BIT_SIZE - bits)
    };

    for d in dst {
        if tail == 0 && c == 0 {
            break;
        }
        c = add_carry(*d, tail, c, d);
        tail = 0;
    }

    debug_assert!(tail == 0 && c == 0);
}

/// Divide unsigned `m` by `d` in place and return the remainder.
pub fn div_by_limb(m: &mut [Limb], d: Limb) -> Limb {
    debug_assert!(d != 0);

    let d = d as DoubleLimb;
    let mut rh: DoubleLimb = 0;

    for v in m.iter_mut().rev() {
        let qh = (rh << LIMB_BIT_SIZE) | *v as DoubleLimb;
        rh = qh % d;
        *v = (qh / d) as Limb;
    }

    rh as Limb
}

/// Multiply unsigned `m` by `k` in place and return the overflow limb.
pub fn mul_by_limb(m: &mut [Limb], k: Limb) -> Limb {
    let k = k as DoubleLimb;
    let mut carry: DoubleLimb = 0;

    for v in m.iter_mut() {
        let p = *v as DoubleLimb * k + carry;
        *v = p as Limb;
        carry = p >> LIMB_BIT_SIZE;
    }

    carry as Limb
}

/// Returns true if every limb of `m` is zero.
#[inline]
pub fn is_zero_slice(m: &[Limb]) -> bool {
    m.iter().all(|v| *v == 0)
}
