use bcd_cordic::numeric::Bcd;
use proptest::prelude::*;

// 24 cells: sign sentinel plus 23 digits, one of them before the point
const DIGITS: usize = 23;

fn text(negative: bool, digits: &[u8]) -> String {
    let mut s = String::with_capacity(DIGITS + 2);
    if negative {
        s.push('-');
    }
    for (i, &d) in digits.iter().enumerate() {
        if i == 1 {
            s.push('.');
        }
        s.push(char::from(b'0' + d));
    }
    s
}

fn bcd_strategy() -> impl Strategy<Value = (bool, Vec<u8>)> {
    (any::<bool>(), prop::collection::vec(0u8..10, DIGITS))
}

// Small values: integer digit below 5, so no sum of two can leave [-10, 10)
fn small_strategy() -> impl Strategy<Value = Bcd> {
    (any::<bool>(), 0u8..5, prop::collection::vec(0u8..10, DIGITS - 1)).prop_map(
        |(negative, int, mut frac)| {
            frac.insert(0, int);
            Bcd::load(&text(negative, &frac))
        },
    )
}

// Property 1: Display prints back exactly the digits that were loaded
proptest! {
    #[test]
    fn prop_display_roundtrip((negative, digits) in bcd_strategy()) {
        let value: Bcd = Bcd::load(&text(negative, &digits));
        let nonzero = digits.iter().any(|&d| d != 0);

        prop_assert_eq!(value.to_string(), text(negative && nonzero, &digits));
        prop_assert_eq!(value.is_negative(), negative && nonzero);
        prop_assert!(value.is_valid());
    }
}

// Property 2: Strict parse agrees with lenient load on well formed text
proptest! {
    #[test]
    fn prop_strict_parse_matches_load((negative, digits) in bcd_strategy()) {
        let s = text(negative, &digits);
        let parsed: Bcd = s.parse().unwrap();
        prop_assert_eq!(parsed, Bcd::load(&s));
    }
}

// Property 3: Negation is an involution and cancels under addition
proptest! {
    #[test]
    fn prop_negation((negative, digits) in bcd_strategy()) {
        let x: Bcd = Bcd::load(&text(negative, &digits));

        prop_assert_eq!(-(-x), x);
        prop_assert!((x + (-x)).is_zero());
        prop_assert_eq!(x - x, Bcd::ZERO);
    }
}

// Property 4: Addition is commutative and checked addition agrees in range
proptest! {
    #[test]
    fn prop_addition_commutative(a in small_strategy(), b in small_strategy()) {
        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!(a.checked_add(b).unwrap(), a + b);
        prop_assert_eq!(a.checked_sub(b).unwrap(), a - b);
    }
}

// Property 5: Ordering matches the decimal value
proptest! {
    #[test]
    fn prop_ordering_matches_decimal(
        (na, da) in bcd_strategy(),
        (nb, db) in bcd_strategy()
    ) {
        let a: Bcd = Bcd::load(&text(na, &da));
        let b: Bcd = Bcd::load(&text(nb, &db));

        prop_assert_eq!(a.cmp(&b), a.to_decimal().unwrap().cmp(&b.to_decimal().unwrap()));
        prop_assert_eq!(Bcd::from_decimal(a.to_decimal().unwrap()).unwrap(), a);
    }
}

// Property 6: Shifting by zero is the identity, further shifts never grow
proptest! {
    #[test]
    fn prop_shift_decays((_, digits) in bcd_strategy(), bits in 0u32..80) {
        let x: Bcd = Bcd::load(&text(false, &digits));

        prop_assert_eq!(x.shr(0), x);
        prop_assert!(x.shr(bits + 1) <= x.shr(bits));
        prop_assert!(!x.shr(bits).is_negative());
    }
}

// Property 7: Shifting keeps the sign of a negative value until it rounds to zero
proptest! {
    #[test]
    fn prop_shift_preserves_sign((_, digits) in bcd_strategy(), bits in 0u32..4) {
        prop_assume!(digits[0] != 0);
        let x: Bcd = Bcd::load(&text(true, &digits));

        let shifted = x.shr(bits);
        prop_assert!(shifted.is_negative());
        prop_assert!(shifted >= x);
    }
}
