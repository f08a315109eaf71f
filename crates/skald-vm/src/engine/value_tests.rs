use crate::engine::error::ErrorKind;
use crate::engine::value::Value;

#[test]
fn from_unsigned() {
    assert_eq!(Value::from_u8(0x8f).as_u64(), 0x8f);
    assert_eq!(Value::from_u16(0x1234).as_u64(), 0x1234);
    assert_eq!(Value::from_u32(0xdeadbeef).as_u64(), 0xdeadbeef);
    assert_eq!(
        Value::from_u64(0x1234567890abcdef).as_u64(),
        0x1234567890abcdef
    );
}

#[test]
fn from_signed() {
    assert_eq!(Value::from_i8(0x34).as_u64(), 0x34);
    assert_eq!(Value::from_i8(0x8f_u8 as i8).as_u64(), 0xffffffffffffff8f);
    assert_eq!(Value::from_i16(0x1234).as_u64(), 0x1234);
    assert_eq!(
        Value::from_i16(0x8234_u16 as i16).as_u64(),
        0xffffffffffff8234
    );
    assert_eq!(Value::from_i32(0x7eadbeef).as_u64(), 0x7eadbeef);
    assert_eq!(
        Value::from_i32(0xdeadbeef_u32 as i32).as_u64(),
        0xffffffffdeadbeef
    );
    assert_eq!(Value::from_i64(-1).as_u64(), u64::MAX);
}

#[test]
fn narrowing_accessors() {
    let v = Value::from_u64(0x1234567890abcdef);
    assert_eq!(v.as_u8(), 0xef);
    assert_eq!(v.as_i8(), 0xef_u8 as i8);
    assert_eq!(v.as_u16(), 0xcdef);
    assert_eq!(v.as_u32(), 0x90abcdef);
    assert_eq!(v.as_i64(), 0x1234567890abcdef_i64);
}

#[test]
fn addition_wraps() {
    assert_eq!(Value::from_u64(4).add(Value::from_u64(6)), Value::from_u64(10));
    assert_eq!(
        Value::from_u64(100).add(Value::from_i64(-25)),
        Value::from_u64(75)
    );
    assert_eq!(Value::from_i64(-1).add(Value::from_u64(1)), Value::from_u64(0));
    assert_eq!(
        Value::from_u64(u64::MAX).add(Value::from_u64(2)),
        Value::from_u64(1)
    );
}

#[test]
fn subtraction_wraps() {
    assert_eq!(
        Value::from_u64(1150).sub(Value::from_u64(150)),
        Value::from_u64(1000)
    );
    assert_eq!(
        Value::from_u64(1234).sub(Value::from_i64(-6)),
        Value::from_u64(1240)
    );
    assert_eq!(Value::from_u64(0).sub(Value::from_u64(1)), Value::from_i64(-1));
}

#[test]
fn multiplication_wraps() {
    assert_eq!(Value::from_u64(8).mul(Value::from_u64(3)), Value::from_u64(24));
    assert_eq!(
        Value::from_u64(12).mul(Value::from_i64(-2)),
        Value::from_i64(-24)
    );
    assert_eq!(
        Value::from_i64(-25).mul(Value::from_i64(-4)),
        Value::from_u64(100)
    );
    // The low 64 bits are interpretation independent.
    assert_eq!(
        Value::from_i64(i64::MIN).mul(Value::from_i64(-1)),
        Value::from_i64(i64::MIN)
    );
}

#[test]
fn unsigned_division() {
    assert_eq!(
        Value::from_u64(12).div_unsigned(Value::from_u64(3)).unwrap(),
        Value::from_u64(4)
    );
    assert_eq!(
        Value::from_u64(15).div_unsigned(Value::from_u64(4)).unwrap(),
        Value::from_u64(3)
    );

    assert!(matches!(
        Value::from_u64(1526).div_unsigned(Value::from_u64(0)),
        Err(ErrorKind::DivideByZero)
    ));
}

#[test]
fn signed_division() {
    assert_eq!(
        Value::from_u64(12).div_signed(Value::from_i64(-3)).unwrap(),
        Value::from_i64(-4)
    );
    assert_eq!(
        Value::from_i64(-36).div_signed(Value::from_i64(-18)).unwrap(),
        Value::from_u64(2)
    );
    // Truncation toward zero
    assert_eq!(
        Value::from_i64(-7).div_signed(Value::from_i64(2)).unwrap(),
        Value::from_i64(-3)
    );

    assert!(matches!(
        Value::from_i64(-162456).div_signed(Value::from_i64(0)),
        Err(ErrorKind::DivideByZero)
    ));
}

#[test]
fn signed_division_minimum_wraps() {
    // i64::MIN / -1 has no signed representation; the result wraps back to
    // i64::MIN rather than trapping or erroring.
    assert_eq!(
        Value::from_i64(i64::MIN)
            .div_signed(Value::from_i64(-1))
            .unwrap(),
        Value::from_i64(i64::MIN)
    );
}

#[test]
fn remainder() {
    assert_eq!(
        Value::from_u64(64).rem_unsigned(Value::from_u64(5)).unwrap(),
        Value::from_u64(4)
    );
    assert_eq!(
        Value::from_u64(121).rem_unsigned(Value::from_u64(11)).unwrap(),
        Value::from_u64(0)
    );

    assert!(matches!(
        Value::from_u64(1234).rem_unsigned(Value::from_u64(0)),
        Err(ErrorKind::DivideByZero)
    ));
}

#[test]
fn division_remainder_identity() {
    // a == (a / b) * b + (a % b) for unsigned div/mod, and the signed
    // analogue under wrapping arithmetic.
    let cases: &[(u64, u64)] = &[
        (0, 1),
        (7, 3),
        (64, 5),
        (u64::MAX, 2),
        (u64::MAX, u64::MAX),
        (1, u64::MAX),
    ];
    for &(a, b) in cases {
        let a = Value::from_u64(a);
        let b = Value::from_u64(b);
        let q = a.div_unsigned(b).unwrap();
        let r = a.rem_unsigned(b).unwrap();
        assert_eq!(q.mul(b).add(r), a);
    }

    let signed_cases: &[(i64, i64)] = &[
        (7, -3),
        (-7, 3),
        (-7, -3),
        (i64::MIN, -1),
        (i64::MIN, 2),
        (i64::MAX, -2),
    ];
    for &(a, b) in signed_cases {
        let a = Value::from_i64(a);
        let b = Value::from_i64(b);
        let q = a.div_signed(b).unwrap();
        // a - q*b recovers the remainder under two's-complement wrap.
        let r = a.sub(q.mul(b));
        assert_eq!(q.mul(b).add(r), a);
    }
}

#[test]
fn comparisons_unsigned() {
    let one = Value::from_u64(1);
    let two = Value::from_u64(2);
    let minus = Value::from_i64(-1); // 0xffff_ffff_ffff_ffff unsigned

    assert_eq!(two.greater_unsigned(one), Value::from_u64(1));
    assert_eq!(one.greater_unsigned(two), Value::from_u64(0));
    assert_eq!(minus.greater_unsigned(two), Value::from_u64(1));
    assert_eq!(one.less_unsigned(two), Value::from_u64(1));
    assert_eq!(two.less_or_eq_unsigned(two), Value::from_u64(1));
    assert_eq!(two.greater_or_eq_unsigned(two), Value::from_u64(1));
}

#[test]
fn comparisons_signed() {
    let one = Value::from_i64(1);
    let minus = Value::from_i64(-1);

    assert_eq!(minus.greater_signed(one), Value::from_u64(0));
    assert_eq!(one.greater_signed(minus), Value::from_u64(1));
    assert_eq!(minus.less_signed(one), Value::from_u64(1));
    assert_eq!(minus.less_or_eq_signed(minus), Value::from_u64(1));
    assert_eq!(
        Value::from_i64(i64::MIN).less_signed(Value::from_i64(i64::MAX)),
        Value::from_u64(1)
    );
}

#[test]
fn equality_is_bitwise() {
    assert_eq!(
        Value::from_i64(-1).eq(Value::from_u64(u64::MAX)),
        Value::from_u64(1)
    );
    assert_eq!(Value::from_u64(5).eq(Value::from_u64(6)), Value::from_u64(0));
}

#[test]
fn bitwise_ops() {
    let a = Value::from_u64(0b1100);
    let b = Value::from_u64(0b1010);
    assert_eq!(a.and(b), Value::from_u64(0b1000));
    assert_eq!(a.or(b), Value::from_u64(0b1110));
    assert_eq!(a.xor(b), Value::from_u64(0b0110));
    assert_eq!(Value::from_u64(0).inv(), Value::from_u64(u64::MAX));
    assert_eq!(Value::from_i64(-1).inv(), Value::from_u64(0));
}

#[test]
fn logical_not_canonicalizes() {
    assert_eq!(Value::from_u64(0).not(), Value::from_u64(1));
    assert_eq!(Value::from_u64(1).not(), Value::from_u64(0));
    assert_eq!(Value::from_u64(7).not(), Value::from_u64(0));

    // Two nots canonicalize any value to a boolean.
    for raw in [0_u64, 1, 2, 0xdeadbeef, u64::MAX] {
        let expected = Value::from_u64((raw != 0) as u64);
        assert_eq!(Value::from_u64(raw).not().not(), expected);
    }
}
