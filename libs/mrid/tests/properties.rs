use proptest::prelude::*;
use sep_mrid::{build_mup_mrid, build_reading_mrid, Mrid, VendorCode, MRID_LEN};

fn identity() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 8..=32)
}

fn vendor_code() -> impl Strategy<Value = String> {
    "[0-9a-fA-F]{1,12}"
}

fn is_upper_hex(s: &str) -> bool {
    s.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F'))
}

proptest! {
    #[test]
    fn reading_mrid_is_deterministic(
        identity in identity(),
        name in "\\PC{1,24}",
        vendor in vendor_code(),
    ) {
        let first = build_reading_mrid(&identity, &name, &vendor).unwrap();
        let second = build_reading_mrid(&identity, &name, &vendor).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn mrids_are_32_uppercase_hex(
        identity in identity(),
        name in "\\PC{1,24}",
        role_flag in any::<u32>(),
        vendor in vendor_code(),
    ) {
        let reading = build_reading_mrid(&identity, &name, &vendor).unwrap().to_string();
        let mup = build_mup_mrid(&identity, u64::from(role_flag), &vendor).unwrap().to_string();

        for s in [&reading, &mup] {
            prop_assert_eq!(s.len(), MRID_LEN);
            prop_assert!(is_upper_hex(s), "not uppercase hex: {}", s);
            prop_assert_eq!(Mrid::parse(s).unwrap().to_string(), s.as_str());
        }
    }

    #[test]
    fn vendor_change_only_touches_suffix(
        identity in identity(),
        role_flag in any::<u32>(),
        a in vendor_code(),
        b in vendor_code(),
    ) {
        let left = build_mup_mrid(&identity, u64::from(role_flag), &a).unwrap().to_string();
        let right = build_mup_mrid(&identity, u64::from(role_flag), &b).unwrap().to_string();
        prop_assert_eq!(&left[..24], &right[..24]);
    }

    #[test]
    fn identity_change_only_touches_prefix(
        a in identity(),
        b in identity(),
        name in "[A-Za-z]{1,16}",
        vendor in vendor_code(),
    ) {
        let left = build_reading_mrid(&a, &name, &vendor).unwrap().to_string();
        let right = build_reading_mrid(&b, &name, &vendor).unwrap().to_string();
        prop_assert_eq!(&left[16..], &right[16..]);
        prop_assert_eq!(left[..16] == right[..16], a[..8] == b[..8]);
    }

    #[test]
    fn role_change_only_touches_middle(
        identity in identity(),
        a in any::<u32>(),
        b in any::<u32>(),
        vendor in vendor_code(),
    ) {
        let left = build_mup_mrid(&identity, u64::from(a), &vendor).unwrap().to_string();
        let right = build_mup_mrid(&identity, u64::from(b), &vendor).unwrap().to_string();
        prop_assert_eq!(&left[..16], &right[..16]);
        prop_assert_eq!(&left[24..], &right[24..]);
        prop_assert_eq!(&left[16..24], format!("{:08X}", a));
    }

    #[test]
    fn vendor_keeps_rightmost_eight(code in vendor_code()) {
        let upper = code.to_ascii_uppercase();
        let expected = if upper.len() >= 8 {
            upper[upper.len() - 8..].to_string()
        } else {
            format!("{:0>8}", upper)
        };
        prop_assert_eq!(VendorCode::parse(&code).unwrap().to_hex(), expected);
    }

    #[test]
    fn oversized_role_flags_are_rejected(extra in 1u64..=u64::from(u32::MAX)) {
        let value = (extra << 32) | 0x49;
        prop_assert!(build_mup_mrid(&[0u8; 20], value, "1A2B").is_err());
    }
}
