//! Small tagged types used throughout the decoder so that color type and
//! chunk type are never re-interpreted from a raw byte more than once.

/// PNG color type, tagged with the channel count each variant implies.
///
/// Parsing `IHDR`'s raw color-type byte into this enum once, up front,
/// means every later stage (bpp computation, pixel unpacking) matches on
/// a closed set instead of re-checking `color_type == 3` deep inside a
/// hot loop.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum PngColor
{
    /// Color type 0: a single grayscale channel.
    Luma,
    /// Color type 4: grayscale plus alpha.
    LumaA,
    /// Color type 2: three-channel RGB, optionally alongside an unused palette.
    RGB,
    /// Color type 6: four-channel RGBA.
    RGBA,
    /// Color type 3: palette-indexed; samples are indices into `PLTE`.
    Palette,
    /// Not yet known / invalid. Only ever observed before `IHDR` is parsed.
    #[default]
    Unknown
}

impl PngColor
{
    /// Number of samples per pixel in the *raw* (pre-palette-lookup) scanline.
    pub(crate) const fn raw_channels(self) -> u8
    {
        match self
        {
            PngColor::Luma => 1,
            PngColor::LumaA => 2,
            PngColor::RGB => 3,
            PngColor::RGBA => 4,
            PngColor::Palette => 1,
            PngColor::Unknown => 0
        }
    }

    pub(crate) const fn from_byte(byte: u8) -> Option<PngColor>
    {
        match byte
        {
            0 => Some(PngColor::Luma),
            2 => Some(PngColor::RGB),
            3 => Some(PngColor::Palette),
            4 => Some(PngColor::LumaA),
            6 => Some(PngColor::RGBA),
            _ => None
        }
    }
}

/// PNG filter method (the `IHDR` field, not the per-scanline filter byte).
///
/// The PNG spec defines exactly one filter method, so this has a single
/// variant; it exists to make "filter method" and "per-row filter type"
/// (see [`crate::scanline::FilterType`]) impossible to confuse at the type
/// level.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum FilterMethod
{
    #[default]
    None
}

impl FilterMethod
{
    pub(crate) const fn from_byte(byte: u8) -> Option<FilterMethod>
    {
        match byte
        {
            0 => Some(FilterMethod::None),
            _ => None
        }
    }
}

/// PNG interlace method. Only `Standard` (no interlacing) is supported;
/// `Adam7` is recognized only so that decoding it can fail with a precise
/// error instead of silently misreading scanlines.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum InterlaceMethod
{
    #[default]
    Standard,
    Adam7
}

impl InterlaceMethod
{
    pub(crate) const fn from_byte(byte: u8) -> Option<InterlaceMethod>
    {
        match byte
        {
            0 => Some(InterlaceMethod::Standard),
            1 => Some(InterlaceMethod::Adam7),
            _ => None
        }
    }
}

/// The PNG chunk types this decoder recognizes by name.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PngChunkType
{
    IHDR,
    PLTE,
    IDAT,
    IEND,
    tRNS,
    pHYs,
    tIME,
    /// Any chunk type not listed above; routed to the ancillary chunk
    /// handler in [`crate::options::PngOptions`].
    Unknown
}

impl PngChunkType
{
    pub(crate) fn from_bytes(bytes: &[u8; 4]) -> PngChunkType
    {
        match bytes
        {
            b"IHDR" => PngChunkType::IHDR,
            b"PLTE" => PngChunkType::PLTE,
            b"IDAT" => PngChunkType::IDAT,
            b"IEND" => PngChunkType::IEND,
            b"tRNS" => PngChunkType::tRNS,
            b"pHYs" => PngChunkType::pHYs,
            b"tIME" => PngChunkType::tIME,
            _ => PngChunkType::Unknown
        }
    }
}
