//! Compiled-in radius-ratio tables for the 3-ring and 4-ring marker families.
//!
//! Calibration data: values are carried exactly as measured, row `k` is the
//! signature of marker id `k + 1`.

/// Signatures of the 3-ring family: 32 markers, 5 ratios each.
#[rustfmt::skip]
pub(crate) static THREE_RINGS: [[f32; 5]; 32] = [
    [2.000000, 1.666667, 1.428571, 1.250000, 1.111111],
    [2.222222, 1.666667, 1.428571, 1.250000, 1.111111],
    [2.222222, 1.818182, 1.428571, 1.250000, 1.111111],
    [2.500000, 1.818182, 1.428571, 1.250000, 1.111111],
    [2.222222, 1.818182, 1.538462, 1.250000, 1.111111],
    [2.500000, 1.818182, 1.538462, 1.250000, 1.111111],
    [2.500000, 2.000000, 1.538462, 1.250000, 1.111111],
    [2.857143, 2.000000, 1.538462, 1.250000, 1.111111],
    [2.222222, 1.818182, 1.538462, 1.333333, 1.111111],
    [2.500000, 1.818182, 1.538462, 1.333333, 1.111111],
    [2.500000, 2.000000, 1.538462, 1.333333, 1.111111],
    [2.857143, 2.000000, 1.538462, 1.333333, 1.111111],
    [2.500000, 2.000000, 1.666667, 1.333333, 1.111111],
    [2.857143, 2.000000, 1.666667, 1.333333, 1.111111],
    [2.857143, 2.222222, 1.666667, 1.333333, 1.111111],
    [3.333333, 2.222222, 1.666667, 1.333333, 1.111111],
    [2.222222, 1.818182, 1.538462, 1.333333, 1.176471],
    [2.500000, 1.818182, 1.538462, 1.333333, 1.176471],
    [2.500000, 2.000000, 1.538462, 1.333333, 1.176471],
    [2.857143, 2.000000, 1.538462, 1.333333, 1.176471],
    [2.500000, 2.000000, 1.666667, 1.333333, 1.176471],
    [2.857143, 2.000000, 1.666667, 1.333333, 1.176471],
    [2.857143, 2.222222, 1.666667, 1.333333, 1.176471],
    [3.333333, 2.222222, 1.666667, 1.333333, 1.176471],
    [2.500000, 2.000000, 1.666667, 1.428571, 1.176471],
    [2.857143, 2.000000, 1.666667, 1.428571, 1.176471],
    [2.857143, 2.222222, 1.666667, 1.428571, 1.176471],
    [3.333333, 2.222222, 1.666667, 1.428571, 1.176471],
    [2.857143, 2.222222, 1.818182, 1.428571, 1.176471],
    [3.333333, 2.222222, 1.818182, 1.428571, 1.176471],
    [3.333333, 2.500000, 1.818182, 1.428571, 1.176471],
    [4.000000, 2.500000, 1.818182, 1.428571, 1.176471],
];

/// Signatures of the 4-ring family: 128 markers, 7 ratios each.
#[rustfmt::skip]
pub(crate) static FOUR_RINGS: [[f32; 7]; 128] = [
    [2.272727, 1.923077, 1.666667, 1.470588, 1.315789, 1.190476, 1.086957],
    [2.500000, 1.923077, 1.666667, 1.470588, 1.315789, 1.190476, 1.086957],
    [2.500000, 2.083333, 1.666667, 1.470588, 1.315789, 1.190476, 1.086957],
    [2.777778, 2.083333, 1.666667, 1.470588, 1.315789, 1.190476, 1.086957],
    [2.500000, 2.083333, 1.785714, 1.470588, 1.315789, 1.190476, 1.086957],
    [2.777778, 2.083333, 1.785714, 1.470588, 1.315789, 1.190476, 1.086957],
    [2.777778, 2.272727, 1.785714, 1.470588, 1.315789, 1.190476, 1.086957],
    [3.125000, 2.272727, 1.785714, 1.470588, 1.315789, 1.190476, 1.086957],
    [2.500000, 2.083333, 1.785714, 1.562500, 1.315789, 1.190476, 1.086957],
    [2.777778, 2.083333, 1.785714, 1.562500, 1.315789, 1.190476, 1.086957],
    [2.777778, 2.272727, 1.785714, 1.562500, 1.315789, 1.190476, 1.086957],
    [3.125000, 2.272727, 1.785714, 1.562500, 1.315789, 1.190476, 1.086957],
    [2.777778, 2.272727, 1.923077, 1.562500, 1.315789, 1.190476, 1.086957],
    [3.125000, 2.272727, 1.923077, 1.562500, 1.315789, 1.190476, 1.086957],
    [3.125000, 2.500000, 1.923077, 1.562500, 1.315789, 1.190476, 1.086957],
    [3.571429, 2.500000, 1.923077, 1.562500, 1.315789, 1.190476, 1.086957],
    [2.500000, 2.083333, 1.785714, 1.562500, 1.388889, 1.190476, 1.086957],
    [2.777778, 2.083333, 1.785714, 1.562500, 1.388889, 1.190476, 1.086957],
    [2.777778, 2.272727, 1.785714, 1.562500, 1.388889, 1.190476, 1.086957],
    [3.125000, 2.272727, 1.785714, 1.562500, 1.388889, 1.190476, 1.086957],
    [2.777778, 2.272727, 1.923077, 1.562500, 1.388889, 1.190476, 1.086957],
    [3.125000, 2.272727, 1.923077, 1.562500, 1.388889, 1.190476, 1.086957],
    [3.125000, 2.500000, 1.923077, 1.562500, 1.388889, 1.190476, 1.086957],
    [3.571429, 2.500000, 1.923077, 1.562500, 1.388889, 1.190476, 1.086957],
    [2.777778, 2.272727, 1.923077, 1.666667, 1.388889, 1.190476, 1.086957],
    [3.125000, 2.272727, 1.923077, 1.666667, 1.388889, 1.190476, 1.086957],
    [3.125000, 2.500000, 1.923077, 1.666667, 1.388889, 1.190476, 1.086957],
    [3.571429, 2.500000, 1.923077, 1.666667, 1.388889, 1.190476, 1.086957],
    [3.125000, 2.500000, 2.083333, 1.666667, 1.388889, 1.190476, 1.086957],
    [3.571429, 2.500000, 2.083333, 1.666667, 1.388889, 1.190476, 1.086957],
    [3.571429, 2.777778, 2.083333, 1.666667, 1.388889, 1.190476, 1.086957],
    [4.166667, 2.777778, 2.083333, 1.666667, 1.388889, 1.190476, 1.086957],
    [2.500000, 2.083333, 1.785714, 1.562500, 1.388889, 1.250000, 1.086957],
    [2.777778, 2.083333, 1.785714, 1.562500, 1.388889, 1.250000, 1.086957],
    [2.777778, 2.272727, 1.785714, 1.562500, 1.388889, 1.250000, 1.086957],
    [3.125000, 2.272727, 1.785714, 1.562500, 1.388889, 1.250000, 1.086957],
    [2.777778, 2.272727, 1.923077, 1.562500, 1.388889, 1.250000, 1.086957],
    [3.125000, 2.272727, 1.923077, 1.562500, 1.388889, 1.250000, 1.086957],
    [3.125000, 2.500000, 1.923077, 1.562500, 1.388889, 1.250000, 1.086957],
    [3.571429, 2.500000, 1.923077, 1.562500, 1.388889, 1.250000, 1.086957],
    [2.777778, 2.272727, 1.923077, 1.666667, 1.388889, 1.250000, 1.086957],
    [3.125000, 2.272727, 1.923077, 1.666667, 1.388889, 1.250000, 1.086957],
    [3.125000, 2.500000, 1.923077, 1.666667, 1.388889, 1.250000, 1.086957],
    [3.571429, 2.500000, 1.923077, 1.666667, 1.388889, 1.250000, 1.086957],
    [3.125000, 2.500000, 2.083333, 1.666667, 1.388889, 1.250000, 1.086957],
    [3.571429, 2.500000, 2.083333, 1.666667, 1.388889, 1.250000, 1.086957],
    [3.571429, 2.777778, 2.083333, 1.666667, 1.388889, 1.250000, 1.086957],
    [4.166667, 2.777778, 2.083333, 1.666667, 1.388889, 1.250000, 1.086957],
    [2.777778, 2.272727, 1.923077, 1.666667, 1.470588, 1.250000, 1.086957],
    [3.125000, 2.272727, 1.923077, 1.666667, 1.470588, 1.250000, 1.086957],
    [3.125000, 2.500000, 1.923077, 1.666667, 1.470588, 1.250000, 1.086957],
    [3.571429, 2.500000, 1.923077, 1.666667, 1.470588, 1.250000, 1.086957],
    [3.125000, 2.500000, 2.083333, 1.666667, 1.470588, 1.250000, 1.086957],
    [3.571429, 2.500000, 2.083333, 1.666667, 1.470588, 1.250000, 1.086957],
    [3.571429, 2.777778, 2.083333, 1.666667, 1.470588, 1.250000, 1.086957],
    [4.166667, 2.777778, 2.083333, 1.666667, 1.470588, 1.250000, 1.086957],
    [3.125000, 2.500000, 2.083333, 1.785714, 1.470588, 1.250000, 1.086957],
    [3.571429, 2.500000, 2.083333, 1.785714, 1.470588, 1.250000, 1.086957],
    [3.571429, 2.777778, 2.083333, 1.785714, 1.470588, 1.250000, 1.086957],
    [4.166667, 2.777778, 2.083333, 1.785714, 1.470588, 1.250000, 1.086957],
    [3.571429, 2.777778, 2.272727, 1.785714, 1.470588, 1.250000, 1.086957],
    [4.166667, 2.777778, 2.272727, 1.785714, 1.470588, 1.250000, 1.086957],
    [4.166667, 3.125000, 2.272727, 1.785714, 1.470588, 1.250000, 1.086957],
    [5.000000, 3.125000, 2.272727, 1.785714, 1.470588, 1.250000, 1.086957],
    [2.500000, 2.083333, 1.785714, 1.562500, 1.388889, 1.250000, 1.136364],
    [2.777778, 2.083333, 1.785714, 1.562500, 1.388889, 1.250000, 1.136364],
    [2.777778, 2.272727, 1.785714, 1.562500, 1.388889, 1.250000, 1.136364],
    [3.125000, 2.272727, 1.785714, 1.562500, 1.388889, 1.250000, 1.136364],
    [2.777778, 2.272727, 1.923077, 1.562500, 1.388889, 1.250000, 1.136364],
    [3.125000, 2.272727, 1.923077, 1.562500, 1.388889, 1.250000, 1.136364],
    [3.125000, 2.500000, 1.923077, 1.562500, 1.388889, 1.250000, 1.136364],
    [3.571429, 2.500000, 1.923077, 1.562500, 1.388889, 1.250000, 1.136364],
    [2.777778, 2.272727, 1.923077, 1.666667, 1.388889, 1.250000, 1.136364],
    [3.125000, 2.272727, 1.923077, 1.666667, 1.388889, 1.250000, 1.136364],
    [3.125000, 2.500000, 1.923077, 1.666667, 1.388889, 1.250000, 1.136364],
    [3.571429, 2.500000, 1.923077, 1.666667, 1.388889, 1.250000, 1.136364],
    [3.125000, 2.500000, 2.083333, 1.666667, 1.388889, 1.250000, 1.136364],
    [3.571429, 2.500000, 2.083333, 1.666667, 1.388889, 1.250000, 1.136364],
    [3.571429, 2.777778, 2.083333, 1.666667, 1.388889, 1.250000, 1.136364],
    [4.166667, 2.777778, 2.083333, 1.666667, 1.388889, 1.250000, 1.136364],
    [2.777778, 2.272727, 1.923077, 1.666667, 1.470588, 1.250000, 1.136364],
    [3.125000, 2.272727, 1.923077, 1.666667, 1.470588, 1.250000, 1.136364],
    [3.125000, 2.500000, 1.923077, 1.666667, 1.470588, 1.250000, 1.136364],
    [3.571429, 2.500000, 1.923077, 1.666667, 1.470588, 1.250000, 1.136364],
    [3.125000, 2.500000, 2.083333, 1.666667, 1.470588, 1.250000, 1.136364],
    [3.571429, 2.500000, 2.083333, 1.666667, 1.470588, 1.250000, 1.136364],
    [3.571429, 2.777778, 2.083333, 1.666667, 1.470588, 1.250000, 1.136364],
    [4.166667, 2.777778, 2.083333, 1.666667, 1.470588, 1.250000, 1.136364],
    [3.125000, 2.500000, 2.083333, 1.785714, 1.470588, 1.250000, 1.136364],
    [3.571429, 2.500000, 2.083333, 1.785714, 1.470588, 1.250000, 1.136364],
    [3.571429, 2.777778, 2.083333, 1.785714, 1.470588, 1.250000, 1.136364],
    [4.166667, 2.777778, 2.083333, 1.785714, 1.470588, 1.250000, 1.136364],
    [3.571429, 2.777778, 2.272727, 1.785714, 1.470588, 1.250000, 1.136364],
    [4.166667, 2.777778, 2.272727, 1.785714, 1.470588, 1.250000, 1.136364],
    [4.166667, 3.125000, 2.272727, 1.785714, 1.470588, 1.250000, 1.136364],
    [5.000000, 3.125000, 2.272727, 1.785714, 1.470588, 1.250000, 1.136364],
    [2.777778, 2.272727, 1.923077, 1.666667, 1.470588, 1.315789, 1.136364],
    [3.125000, 2.272727, 1.923077, 1.666667, 1.470588, 1.315789, 1.136364],
    [3.125000, 2.500000, 1.923077, 1.666667, 1.470588, 1.315789, 1.136364],
    [3.571429, 2.500000, 1.923077, 1.666667, 1.470588, 1.315789, 1.136364],
    [3.125000, 2.500000, 2.083333, 1.666667, 1.470588, 1.315789, 1.136364],
    [3.571429, 2.500000, 2.083333, 1.666667, 1.470588, 1.315789, 1.136364],
    [3.571429, 2.777778, 2.083333, 1.666667, 1.470588, 1.315789, 1.136364],
    [4.166667, 2.777778, 2.083333, 1.666667, 1.470588, 1.315789, 1.136364],
    [3.125000, 2.500000, 2.083333, 1.785714, 1.470588, 1.315789, 1.136364],
    [3.571429, 2.500000, 2.083333, 1.785714, 1.470588, 1.315789, 1.136364],
    [3.571429, 2.777778, 2.083333, 1.785714, 1.470588, 1.315789, 1.136364],
    [4.166667, 2.777778, 2.083333, 1.785714, 1.470588, 1.315789, 1.136364],
    [3.571429, 2.777778, 2.272727, 1.785714, 1.470588, 1.315789, 1.136364],
    [4.166667, 2.777778, 2.272727, 1.785714, 1.470588, 1.315789, 1.136364],
    [4.166667, 3.125000, 2.272727, 1.785714, 1.470588, 1.315789, 1.136364],
    [5.000000, 3.125000, 2.272727, 1.785714, 1.470588, 1.315789, 1.136364],
    [3.125000, 2.500000, 2.083333, 1.785714, 1.562500, 1.315789, 1.136364],
    [3.571429, 2.500000, 2.083333, 1.785714, 1.562500, 1.315789, 1.136364],
    [3.571429, 2.777778, 2.083333, 1.785714, 1.562500, 1.315789, 1.136364],
    [4.166667, 2.777778, 2.083333, 1.785714, 1.562500, 1.315789, 1.136364],
    [3.571429, 2.777778, 2.272727, 1.785714, 1.562500, 1.315789, 1.136364],
    [4.166667, 2.777778, 2.272727, 1.785714, 1.562500, 1.315789, 1.136364],
    [4.166667, 3.125000, 2.272727, 1.785714, 1.562500, 1.315789, 1.136364],
    [5.000000, 3.125000, 2.272727, 1.785714, 1.562500, 1.315789, 1.136364],
    [3.571429, 2.777778, 2.272727, 1.923077, 1.562500, 1.315789, 1.136364],
    [4.166667, 2.777778, 2.272727, 1.923077, 1.562500, 1.315789, 1.136364],
    [4.166667, 3.125000, 2.272727, 1.923077, 1.562500, 1.315789, 1.136364],
    [5.000000, 3.125000, 2.272727, 1.923077, 1.562500, 1.315789, 1.136364],
    [4.166667, 3.125000, 2.500000, 1.923077, 1.562500, 1.315789, 1.136364],
    [5.000000, 3.125000, 2.500000, 1.923077, 1.562500, 1.315789, 1.136364],
    [5.000000, 3.571429, 2.500000, 1.923077, 1.562500, 1.315789, 1.136364],
    [6.250000, 3.571429, 2.500000, 1.923077, 1.562500, 1.315789, 1.136364],
];
