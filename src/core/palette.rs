/// Process-wide default color palette.
///
/// An ordered, fixed sequence cycled over the dataset entries by the colors
/// hook; indices past the end wrap via modulo. Hosts wanting a different
/// look pass their own palette instead of editing this table.
pub const DEFAULT_PALETTE: &[&str] = &[
    "rgba(255, 99, 132, 0.6)",
    "rgba(54, 162, 235, 0.6)",
    "rgba(255, 206, 86, 0.6)",
    "rgba(75, 192, 192, 0.6)",
    "rgba(153, 102, 255, 0.6)",
    "rgba(255, 159, 64, 0.6)",
    "rgba(199, 199, 199, 0.6)",
];
