use tess::{hex_norm, line, Hex};

/// Collect a line and check that it has the right length and endpoints
fn check_line<I: tess::Integer>(
    start: Hex<I>,
    end: Hex<I>,
    length: usize,
) -> Vec<Hex<I>> {
    let hexes: Vec<Hex<I>> = line(start, end).collect();
    assert_eq!(hexes.len(), length + 1, "wrong length for {}->{}", start, end);
    assert_eq!(hexes[0], start);
    assert_eq!(hexes[length], end);
    hexes
}

#[test]
fn test_length_zero_at_origin() {
    let hexes = check_line(Hex::<i32>::ZERO, Hex::ZERO, 0);
    assert_eq!(hexes, vec![Hex::ZERO]);
}

#[test]
fn test_along_r_axis() {
    let start = Hex::new_qr(-86, 51);
    let end = start - Hex::new_qr(0, 8);
    let hexes = check_line(start, end, 8);
    assert_eq!(hexes[5], start - Hex::new_qr(0, 5));
}

#[test]
fn test_along_s_axis() {
    let start = Hex::new_qr(34i16, 0);
    let end = start + Hex::new_qr(-16, 16);
    let hexes = check_line(start, end, 16);
    assert_eq!(hexes[4], start + Hex::new_qr(-4, 4));
}

#[test]
fn test_r_cross_negative_s() {
    let start = Hex::new_qr(-28, 95);
    let hexes = check_line(start, start + Hex::new_qr(1, 25), 26);
    assert_eq!(hexes[11], Hex::new_qr(-28, 106));
}

#[test]
fn test_negative_q_cross_negative_s() {
    let start = Hex::new_qr(-30i64, -57);
    let hexes = check_line(start, start + Hex::new_qr(-27, 94), 94);
    assert_eq!(hexes[53], Hex::new_qr(-45, -4));
}

#[test]
fn test_q_cross_r() {
    let start = Hex::new_qr(-9520, -1552);
    let hexes = check_line(start, start + Hex::new_qr(278, 96), 374);
    assert_eq!(hexes[337], Hex::new_qr(-9270, -1465));
}

#[test]
fn test_negative_q_cross_negative_r() {
    let start = Hex::new_qr(14634, 16337);
    let hexes = check_line(start, start + Hex::new_qr(-2120, -4008), 6128);
    assert_eq!(hexes[4908], Hex::new_qr(12936, 13127));
}

#[test]
fn test_q_cross_s() {
    let start = Hex::new_qr(37631i64, 76297);
    let hexes = check_line(start, start + Hex::new_qr(12452, -40249), 40249);
    assert_eq!(hexes[8326], Hex::new_qr(40207, 67971));
}

#[test]
fn test_negative_r_cross_s() {
    let start = Hex::new_qr(-4070isize, -9515);
    let hexes = check_line(start, start + Hex::new_qr(-2, -2), 4);
    assert_eq!(hexes[2], Hex::new_qr(-4071, -9516));
}

#[test]
fn test_diagonal() {
    let hexes: Vec<Hex<i32>> =
        line(Hex::ZERO, Hex::new_qr(-2, 5)).collect();
    assert_eq!(
        hexes,
        vec![
            Hex::new_qr(0, 0),
            Hex::new_qr(0, 1),
            Hex::new_qr(-1, 2),
            Hex::new_qr(-1, 3),
            Hex::new_qr(-2, 4),
            Hex::new_qr(-2, 5),
        ]
    );
}

#[test]
fn test_every_step_is_adjacent() {
    let start = Hex::new_qr(14634, 16337);
    let end = start + Hex::new_qr(-2120, -4008);
    let hexes: Vec<Hex<i32>> = line(start, end).collect();
    assert_eq!(hexes.len() as i32, hex_norm(end - start) + 1);
    for pair in hexes.windows(2) {
        assert_eq!(
            pair[0].distance_to(pair[1]),
            1,
            "{} and {} aren't adjacent",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_near_type_bounds() {
    // The difference between these doesn't fit in an i16, but every hex on
    // the line does
    let start = Hex::new_qr(20000i16, -10000);
    let end = Hex::new_qr(-20000i16, 10000);
    let mut hexes = line(start, end);
    assert_eq!(hexes.len(), 40001);

    let mut previous = hexes.next().unwrap();
    assert_eq!(previous, start);
    for hex in hexes {
        assert_eq!(previous.distance_to(hex), 1);
        previous = hex;
    }
    assert_eq!(previous, end);
}
