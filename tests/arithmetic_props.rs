use arithkit::{
    absolute_value, add, divide, floor_division, modulus, multiply, power, subtract, Number,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

#[test]
fn reference_table() {
    assert_eq!(add(10, 5), Number::Int(15));
    assert_eq!(subtract(10, 5), Number::Int(5));
    assert_eq!(multiply(10, 5), Number::Int(50));
    assert_eq!(divide(10, 5).map(Number::as_f64), Some(2.0));
    assert_eq!(power(2, 3), Number::Int(8));
    assert_eq!(modulus(17, 5), Some(Number::Int(2)));
    assert_eq!(floor_division(17, 5), Some(Number::Int(3)));
    assert_eq!(absolute_value(-42), Number::Int(42));
}

#[test]
fn divide_then_multiply_recovers_dividend() {
    let mut rng = rng();
    for _ in 0..10_000 {
        let a: f64 = rng.gen_range(-1e6..1e6);
        let b: f64 = rng.gen_range(-1e3..1e3);
        if b == 0.0 {
            continue;
        }
        let q = divide(a, b).expect("nonzero divisor").as_f64();
        let back = q * b;
        assert!((back - a).abs() <= 1e-9 * a.abs().max(1.0), "{a} / {b} * {b} = {back}");
    }
}

#[test]
fn zero_divisor_is_absent_for_every_division_op() {
    let mut rng = rng();
    let zeros = [Number::Int(0), Number::Float(0.0), Number::Float(-0.0)];
    for _ in 0..1_000 {
        let a = if rng.gen_bool(0.5) {
            Number::Int(rng.gen_range(-1_000_000..1_000_000))
        } else {
            Number::Float(rng.gen_range(-1e6..1e6))
        };
        for z in zeros {
            assert_eq!(divide(a, z), None);
            assert_eq!(modulus(a, z), None);
            assert_eq!(floor_division(a, z), None);
        }
    }
}

#[test]
fn absolute_value_is_non_negative_and_symmetric() {
    let mut rng = rng();
    let mut samples: Vec<Number> = vec![Number::Int(i64::MIN), Number::Int(i64::MAX), Number::Float(-0.0)];
    for _ in 0..5_000 {
        samples.push(Number::Int(rng.gen()));
        samples.push(Number::Float(rng.gen_range(-1e12..1e12)));
    }
    for n in samples {
        let abs = absolute_value(n);
        assert!(abs.as_f64() >= 0.0, "|{n}| = {abs}");
        assert_eq!(abs, absolute_value(-n), "|{n}| != |-{n}|");
    }
}

#[test]
fn power_of_zero_is_one() {
    let mut rng = rng();
    for _ in 0..1_000 {
        let a: i64 = rng.gen_range(1..1_000_000) * if rng.gen_bool(0.5) { 1 } else { -1 };
        assert_eq!(power(a, 0), Number::Int(1));
        let f: f64 = rng.gen_range(0.001..1e6);
        assert_eq!(power(f, 0).as_f64(), 1.0);
    }
}

#[test]
fn floor_division_and_modulus_reassemble_integers() {
    let mut rng = rng();
    for _ in 0..10_000 {
        let a: i64 = rng.gen_range(-1_000_000..1_000_000);
        let b: i64 = rng.gen_range(-1_000..1_000);
        if b == 0 {
            continue;
        }
        let (Some(Number::Int(q)), Some(Number::Int(r))) = (floor_division(a, b), modulus(a, b)) else {
            panic!("integer operands must stay integral for {a}, {b}");
        };
        assert_eq!(q * b + r, a);
        assert!(r == 0 || (r < 0) == (b < 0), "remainder {r} takes divisor sign {b}");
        assert!(r.abs() < b.abs());
    }
}

#[test]
fn callable_from_many_threads() {
    let handles: Vec<_> = (1..=8i64)
        .map(|t| {
            std::thread::spawn(move || {
                (1..1_000i64)
                    .map(|i| modulus(i * t, 7).map(Number::as_f64).unwrap_or(f64::NAN))
                    .sum::<f64>()
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap().is_finite());
    }
}
