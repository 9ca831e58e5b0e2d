//! Checks of arithmetic laws through the public interface.

use astro_bignum::ctx;
use astro_bignum::BigFloat;
use astro_bignum::BigInt;
use astro_bignum::Consts;
use astro_bignum::Error;
use core::cmp::Ordering;
use rand::random;

#[test]
fn int_ops_agree_with_i128() {
    for _ in 0..1000 {
        let a = random::<i64>() as i128 * (random::<i32>() as i128);
        let b = (random::<i64>() >> (random::<u32>() % 63)) as i128;

        let x = BigInt::from(a);
        let y = BigInt::from(b);

        assert_eq!(i128::try_from(&x.add(&y)).unwrap(), a + b);
        assert_eq!(i128::try_from(&x.sub(&y)).unwrap(), a - b);
        assert_eq!(x.cmp(&y), a.cmp(&b));

        if b == 0 {
            assert_eq!(x.div_rem(&y).unwrap_err(), Error::DivisionByZero);
            continue;
        }

        // quotient truncated toward zero, remainder has the sign of the dividend
        let (q, r) = x.div_rem(&y).unwrap();
        assert_eq!(i128::try_from(&q).unwrap(), a / b);
        assert_eq!(i128::try_from(&r).unwrap(), a % b);
        assert_eq!(q.mul(&y).add(&r), x);
    }

    for _ in 0..1000 {
        let a = random::<i64>() as i128;
        let b = random::<i64>() as i128;
        let n = random::<usize>() % 60;

        let x = BigInt::from(a);
        assert_eq!(i128::try_from(&x.mul(&BigInt::from(b))).unwrap(), a * b);
        assert_eq!(i128::try_from(&x.shl(n)).unwrap(), a << n);
        assert_eq!(i128::try_from(&x.shr(n)).unwrap(), a >> n);
    }
}

#[test]
fn int_laws() {
    for _ in 0..100 {
        let a = BigInt::random(random::<usize>() % 6 + 1);
        let b = BigInt::random(random::<usize>() % 6 + 1);
        let c = BigInt::random(random::<usize>() % 3 + 1);

        assert_eq!(&a + &b, &b + &a);
        assert_eq!(&a * &b, &b * &a);
        assert_eq!((&a + &b) + &c, &a + (&b + &c));
        assert_eq!((&a * &b) * &c, &a * (&b * &c));
        assert_eq!(&a + BigInt::new(), a);
        assert_eq!(&a * BigInt::one(), a);
        assert_eq!((&a + &b) * &c, &a * &c + &b * &c);
        assert_eq!(&a - &a, BigInt::new());
        assert_eq!(-(-a.clone()), a);

        let n = random::<usize>() % 200;
        assert_eq!(a.shl(n).shr(n), a);

        if !b.is_zero() {
            let (q, r) = a.div_rem(&b).unwrap();
            assert_eq!(&q * &b + &r, a);
            assert_eq!(r.abs().cmp(&b.abs()), Ordering::Less);
            assert!(r.is_zero() || r.is_negative() == a.is_negative());
        }

        let s = a.to_string();
        assert_eq!(s.parse::<BigInt>().unwrap(), a);
    }
}

#[test]
fn int_text() {
    let s = "-340282366920938463463374607431768211456";
    let n: BigInt = s.parse().unwrap();
    assert_eq!(n, BigInt::from(u128::MAX).add(&BigInt::one()).neg());
    assert_eq!(n.to_string(), s);

    for bad in ["", "-", "+1", "01", "-0", "1.0", "12a"] {
        assert_eq!(bad.parse::<BigInt>().unwrap_err(), Error::Format, "{}", bad);
    }
}

#[test]
fn float_scenarios() {
    // 0.90625 + 0.90625
    let a = BigFloat::parse("0.90625", 2).unwrap();
    let s = a.add(&a);
    assert_eq!(s.exponent(), 0);
    assert_eq!(s.to_string(), "1.8125");

    let one = BigFloat::parse("1.0", 2).unwrap();
    assert_eq!(one.exponent(), 0);
    assert_eq!(one.to_int(), BigInt::one());

    let m_one = BigFloat::parse("-1.0", 2).unwrap();
    assert_eq!(m_one.exponent(), 0);
    assert_eq!(m_one, one.neg());

    let half = BigFloat::one(4).div(&BigFloat::from(2)).unwrap();
    assert_eq!(half.exponent(), -1);
    assert_eq!(half.to_string(), "0.5");
    assert_eq!(half, BigFloat::parse("0.5", 4).unwrap());

    assert_eq!(BigInt::from(15).find_next_prime(), BigInt::from(17));
    assert_eq!(BigInt::new().find_next_prime(), BigInt::from(2));
}

#[test]
fn float_text() {
    for s in ["0.0", "12.375", "-12.375", "1.5", "-0.0009765625", "18446744073709551616.25"] {
        let f = BigFloat::parse(s, 4).unwrap();
        assert_eq!(f.to_string(), s);
    }

    assert_eq!(BigFloat::parse("0.1", 2).unwrap().format(5), "0.10000");
    assert_eq!(BigFloat::parse("2.5", 2).unwrap().format(0), "3");
    assert_eq!(BigFloat::parse("-2.5", 2).unwrap().round_to_int(), BigInt::from(-3));
    assert_eq!(BigFloat::parse("-2.5", 2).unwrap().to_int(), BigInt::from(-2));

    assert_eq!(BigFloat::parse("1", 2).unwrap_err(), Error::Format);
    assert_eq!(BigFloat::parse("1.", 2).unwrap_err(), Error::Format);
    assert_eq!(
        BigFloat::parse("340282366920938463463374607431768211456.0", 2).unwrap_err(),
        Error::PrecisionExceeded
    );
}

#[test]
fn float_laws() {
    for _ in 0..100 {
        let a = BigFloat::random(3, -4, 4);
        let b = BigFloat::random(3, -4, 4);

        assert_eq!(a.add(&b), b.add(&a));
        assert_eq!(a.mul(&b), b.mul(&a));
        assert_eq!(a.sub(&a), BigFloat::new(3));
        assert_eq!(a.cmp(&b), b.cmp(&a).reverse());

        let f1 = a.to_f64();
        let f2 = b.to_f64();
        let p = a.mul(&b).to_f64();
        if p != 0.0 {
            assert!(((f1 * f2 - p) / p).abs() < 1e-14);
        }

        if !b.is_zero() {
            let q = a.div(&b).unwrap();
            let d = q.mul(&b).sub(&a).abs();
            assert!(d.is_zero() || d.exponent() <= a.exponent() - 1);
        } else {
            assert_eq!(a.div(&b).unwrap_err(), Error::DivisionByZero);
        }
    }
}

#[test]
fn float_exact_laws() {
    // dyadic values of a few bits fit the width, so nothing is truncated
    let val = || BigFloat::from(random::<i32>()).mul_pow2((random::<u32>() % 64) as i64 - 32);
    let zero = BigFloat::new(4);
    let one = BigFloat::one(4);

    for _ in 0..100 {
        let a = val();
        let b = val();
        let c = val();

        assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        assert_eq!(a.add(&zero), a);
        assert_eq!(a.mul(&one), a);
        assert_eq!(a.add(&a.neg()), zero);
    }
}

#[test]
fn context_chain() {
    let mut cx = ctx::with_max_width(3);
    let two = cx.parse("2.0").unwrap();
    cx.value(two);
    cx.sqrt().unwrap().pow(2).unwrap();

    let d = cx.get_value().sub(&BigFloat::from(2)).abs();
    assert!(d.is_zero() || d.exponent() <= -2);

    let cx = ctx::with_value(BigFloat::from(3)) * BigFloat::from(4) + BigFloat::from(1);
    assert_eq!(cx, BigFloat::from(13));

    let pi = cx.pi().unwrap();
    assert_eq!(format!("{:.15}", pi), "3.141592653589793");

    let mut cc = Consts::new();
    assert_eq!(BigFloat::from(-1).ln(&mut cc).unwrap_err(), Error::Domain);
    assert_eq!(BigFloat::from(-1).sqrt(&BigFloat::new(1)).unwrap_err(), Error::Domain);
}
