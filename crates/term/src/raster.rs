//! Integer rasterization of the marker shapes.
//!
//! Both functions report points through a `plot` callback in an unbounded
//! signed coordinate space; callers clip.

/// Bresenham line from `(x0, y0)` to `(x1, y1)`, both endpoints included.
pub fn line(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: impl FnMut(i32, i32)) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        plot(x, y);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Midpoint circle outline of radius `r` around `(cx, cy)`.
///
/// Points on octant boundaries may be reported twice.
pub fn circle(cx: i32, cy: i32, r: i32, mut plot: impl FnMut(i32, i32)) {
    if r <= 0 {
        plot(cx, cy);
        return;
    }

    let mut x = r;
    let mut y = 0;
    let mut d = 1 - r;

    while x >= y {
        for (px, py) in [
            (x, y),
            (y, x),
            (-y, x),
            (-x, y),
            (-x, -y),
            (-y, -x),
            (y, -x),
            (x, -y),
        ] {
            plot(cx + px, cy + py);
        }

        y += 1;
        if d < 0 {
            d += 2 * y + 1;
        } else {
            x -= 1;
            d += 2 * (y - x) + 1;
        }
    }
}
