use super::*;

const ALL: [Ease; 3] = [Ease::Linear, Ease::OutCubic, Ease::OutBack];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-0.5), 0.0);
        assert_eq!(ease.apply(1.5), 1.0);
    }
}

#[test]
fn out_back_overshoots_and_peaks_at_half() {
    let peak = Ease::OutBack.apply(0.5);
    assert!((peak - Ease::OUT_BACK_PEAK).abs() < 1e-12);

    let mut max = f64::MIN;
    let mut argmax = 0.0;
    for i in 0..=1000 {
        let t = f64::from(i) / 1000.0;
        let v = Ease::OutBack.apply(t);
        if v > max {
            max = v;
            argmax = t;
        }
    }
    assert!((max - 1.0625).abs() < 1e-9);
    assert!((argmax - 0.5).abs() < 1e-9);
    assert!(Ease::OutBack.apply(0.9) > 1.0);
}

#[test]
fn out_cubic_stays_in_unit_range() {
    for i in 0..=100 {
        let v = Ease::OutCubic.apply(f64::from(i) / 100.0);
        assert!((0.0..=1.0).contains(&v));
    }
}
