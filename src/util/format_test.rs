use super::*;

#[test]
fn timestamp_formats_in_utc() {
    assert_eq!(format_timestamp(1_714_566_896_789), "2024-05-01 12:34 UTC");
    assert_eq!(format_timestamp(0), "1970-01-01 00:00 UTC");
}

#[test]
fn out_of_range_timestamp_is_blank() {
    assert_eq!(format_timestamp(i64::MAX), "");
}

#[test]
fn random_seed_reads_as_random() {
    assert_eq!(format_seed(-1), "Random");
    assert_eq!(format_seed(123_456), "123456");
}

#[test]
fn size_uses_multiplication_sign() {
    let options = ImageGenerationOptions { width: 768, height: 512, ..ImageGenerationOptions::default() };
    assert_eq!(format_size(&options), "768×512");
}
