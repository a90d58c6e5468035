// Copyright 2025 the Propstyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in style prop vocabularies.
//!
//! Each vocabulary is an ordered `&'static [PropSpec]`; every entry is also
//! available as its own constant for components that cherry-pick.
//!
//! Within [`SPACE`], shorthands come before longhands (`m`, `mx`, `my`,
//! `mt`, `mr`, `mb`, `ml`), so a longhand wins over a shorthand that writes
//! the same CSS property. The same holds for borders.

use propstyle_theme::ScaleKey;

use crate::registry::PropSpec;
use crate::resolve::{Unit, fraction, negative_space};

const fn margin(name: &'static str, properties: &'static [&'static str]) -> PropSpec {
    PropSpec::new(name, properties)
        .with_scale(ScaleKey::SPACE)
        .with_transform(negative_space)
        .with_unit(Unit::Px)
}

const fn padding(name: &'static str, properties: &'static [&'static str]) -> PropSpec {
    PropSpec::new(name, properties)
        .with_scale(ScaleKey::SPACE)
        .with_unit(Unit::Px)
}

const fn length(name: &'static str, property: &'static [&'static str]) -> PropSpec {
    PropSpec::new(name, property)
        .with_scale(ScaleKey::SIZES)
        .with_transform(fraction)
        .with_unit(Unit::Px)
}

const fn plain(name: &'static str, property: &'static [&'static str]) -> PropSpec {
    PropSpec::new(name, property)
}

// Space

/// `m`, `margin`.
pub const MARGIN: PropSpec = margin("m", &["margin"]).with_aliases(&["margin"]);
/// `mx`, `marginX`: left and right margins.
pub const MARGIN_X: PropSpec =
    margin("mx", &["margin-left", "margin-right"]).with_aliases(&["marginX"]);
/// `my`, `marginY`: top and bottom margins.
pub const MARGIN_Y: PropSpec =
    margin("my", &["margin-top", "margin-bottom"]).with_aliases(&["marginY"]);
/// `mt`, `marginTop`.
pub const MARGIN_TOP: PropSpec = margin("mt", &["margin-top"]).with_aliases(&["marginTop"]);
/// `mr`, `marginRight`.
pub const MARGIN_RIGHT: PropSpec = margin("mr", &["margin-right"]).with_aliases(&["marginRight"]);
/// `mb`, `marginBottom`.
pub const MARGIN_BOTTOM: PropSpec =
    margin("mb", &["margin-bottom"]).with_aliases(&["marginBottom"]);
/// `ml`, `marginLeft`.
pub const MARGIN_LEFT: PropSpec = margin("ml", &["margin-left"]).with_aliases(&["marginLeft"]);
/// `p`, `padding`.
pub const PADDING: PropSpec = padding("p", &["padding"]).with_aliases(&["padding"]);
/// `px`, `paddingX`: left and right padding.
pub const PADDING_X: PropSpec =
    padding("px", &["padding-left", "padding-right"]).with_aliases(&["paddingX"]);
/// `py`, `paddingY`: top and bottom padding.
pub const PADDING_Y: PropSpec =
    padding("py", &["padding-top", "padding-bottom"]).with_aliases(&["paddingY"]);
/// `pt`, `paddingTop`.
pub const PADDING_TOP: PropSpec = padding("pt", &["padding-top"]).with_aliases(&["paddingTop"]);
/// `pr`, `paddingRight`.
pub const PADDING_RIGHT: PropSpec =
    padding("pr", &["padding-right"]).with_aliases(&["paddingRight"]);
/// `pb`, `paddingBottom`.
pub const PADDING_BOTTOM: PropSpec =
    padding("pb", &["padding-bottom"]).with_aliases(&["paddingBottom"]);
/// `pl`, `paddingLeft`.
pub const PADDING_LEFT: PropSpec = padding("pl", &["padding-left"]).with_aliases(&["paddingLeft"]);

/// Margin and padding, shorthands first.
pub const SPACE: &[PropSpec] = &[
    MARGIN,
    MARGIN_X,
    MARGIN_Y,
    MARGIN_TOP,
    MARGIN_RIGHT,
    MARGIN_BOTTOM,
    MARGIN_LEFT,
    PADDING,
    PADDING_X,
    PADDING_Y,
    PADDING_TOP,
    PADDING_RIGHT,
    PADDING_BOTTOM,
    PADDING_LEFT,
];

// Color

/// `color`, looked up in `colors`.
pub const TEXT_COLOR: PropSpec = PropSpec::new("color", &["color"]).with_scale(ScaleKey::COLORS);
/// `backgroundColor`, `bg`, looked up in `colors`.
pub const BACKGROUND_COLOR: PropSpec = PropSpec::new("backgroundColor", &["background-color"])
    .with_aliases(&["bg"])
    .with_scale(ScaleKey::COLORS);
/// `opacity`.
pub const OPACITY: PropSpec = plain("opacity", &["opacity"]);

/// Foreground, background, and opacity.
pub const COLOR: &[PropSpec] = &[TEXT_COLOR, BACKGROUND_COLOR, OPACITY];

// Layout

/// `width`: fractions become percentages, other numbers look up `sizes`.
pub const WIDTH: PropSpec = length("width", &["width"]);
/// `height`.
pub const HEIGHT: PropSpec = length("height", &["height"]);
/// `minWidth`.
pub const MIN_WIDTH: PropSpec = length("minWidth", &["min-width"]);
/// `maxWidth`.
pub const MAX_WIDTH: PropSpec = length("maxWidth", &["max-width"]);
/// `minHeight`.
pub const MIN_HEIGHT: PropSpec = length("minHeight", &["min-height"]);
/// `maxHeight`.
pub const MAX_HEIGHT: PropSpec = length("maxHeight", &["max-height"]);
/// `size`: width and height at once.
pub const SIZE: PropSpec = length("size", &["width", "height"]);
/// `display`.
pub const DISPLAY: PropSpec = plain("display", &["display"]);
/// `verticalAlign`.
pub const VERTICAL_ALIGN: PropSpec = plain("verticalAlign", &["vertical-align"]);
/// `overflow`.
pub const OVERFLOW: PropSpec = plain("overflow", &["overflow"]);
/// `overflowX`.
pub const OVERFLOW_X: PropSpec = plain("overflowX", &["overflow-x"]);
/// `overflowY`.
pub const OVERFLOW_Y: PropSpec = plain("overflowY", &["overflow-y"]);

/// Box dimensions, display, and overflow. `size` precedes `width` and
/// `height` so the specific props win.
pub const LAYOUT: &[PropSpec] = &[
    SIZE,
    WIDTH,
    HEIGHT,
    MIN_WIDTH,
    MAX_WIDTH,
    MIN_HEIGHT,
    MAX_HEIGHT,
    DISPLAY,
    VERTICAL_ALIGN,
    OVERFLOW,
    OVERFLOW_X,
    OVERFLOW_Y,
];

// Typography

/// `fontFamily`, looked up in `fonts`.
pub const FONT_FAMILY: PropSpec =
    PropSpec::new("fontFamily", &["font-family"]).with_scale(ScaleKey::FONTS);
/// `fontSize`, looked up in `fontSizes`.
pub const FONT_SIZE: PropSpec = PropSpec::new("fontSize", &["font-size"])
    .with_scale(ScaleKey::FONT_SIZES)
    .with_unit(Unit::Px);
/// `fontWeight`, looked up in `fontWeights`.
pub const FONT_WEIGHT: PropSpec =
    PropSpec::new("fontWeight", &["font-weight"]).with_scale(ScaleKey::FONT_WEIGHTS);
/// `lineHeight`, looked up in `lineHeights`.
pub const LINE_HEIGHT: PropSpec =
    PropSpec::new("lineHeight", &["line-height"]).with_scale(ScaleKey::LINE_HEIGHTS);
/// `letterSpacing`, looked up in `letterSpacings`.
pub const LETTER_SPACING: PropSpec = PropSpec::new("letterSpacing", &["letter-spacing"])
    .with_scale(ScaleKey::LETTER_SPACINGS)
    .with_unit(Unit::Px);
/// `textAlign`.
pub const TEXT_ALIGN: PropSpec = plain("textAlign", &["text-align"]);
/// `fontStyle`.
pub const FONT_STYLE: PropSpec = plain("fontStyle", &["font-style"]);

/// Font and text props.
pub const TYPOGRAPHY: &[PropSpec] = &[
    FONT_FAMILY,
    FONT_SIZE,
    FONT_WEIGHT,
    LINE_HEIGHT,
    LETTER_SPACING,
    TEXT_ALIGN,
    FONT_STYLE,
];

// Flexbox

/// `alignItems`.
pub const ALIGN_ITEMS: PropSpec = plain("alignItems", &["align-items"]);
/// `alignContent`.
pub const ALIGN_CONTENT: PropSpec = plain("alignContent", &["align-content"]);
/// `justifyItems`.
pub const JUSTIFY_ITEMS: PropSpec = plain("justifyItems", &["justify-items"]);
/// `justifyContent`.
pub const JUSTIFY_CONTENT: PropSpec = plain("justifyContent", &["justify-content"]);
/// `flexWrap`.
pub const FLEX_WRAP: PropSpec = plain("flexWrap", &["flex-wrap"]);
/// `flexDirection`.
pub const FLEX_DIRECTION: PropSpec = plain("flexDirection", &["flex-direction"]);
/// `flex`.
pub const FLEX: PropSpec = plain("flex", &["flex"]);
/// `flexGrow`.
pub const FLEX_GROW: PropSpec = plain("flexGrow", &["flex-grow"]);
/// `flexShrink`.
pub const FLEX_SHRINK: PropSpec = plain("flexShrink", &["flex-shrink"]);
/// `flexBasis`: sized like `width`.
pub const FLEX_BASIS: PropSpec = length("flexBasis", &["flex-basis"]);
/// `justifySelf`.
pub const JUSTIFY_SELF: PropSpec = plain("justifySelf", &["justify-self"]);
/// `alignSelf`.
pub const ALIGN_SELF: PropSpec = plain("alignSelf", &["align-self"]);
/// `order`.
pub const ORDER: PropSpec = plain("order", &["order"]);

/// Props for flex containers.
pub const FLEX_CONTAINER: &[PropSpec] = &[
    ALIGN_ITEMS,
    ALIGN_CONTENT,
    JUSTIFY_ITEMS,
    JUSTIFY_CONTENT,
    FLEX_WRAP,
    FLEX_DIRECTION,
];

/// Props for flex items.
pub const FLEX_ITEM: &[PropSpec] = &[
    FLEX,
    FLEX_GROW,
    FLEX_SHRINK,
    FLEX_BASIS,
    JUSTIFY_SELF,
    ALIGN_SELF,
    ORDER,
];

/// Container and item props together.
pub const FLEXBOX: &[PropSpec] = &[
    ALIGN_ITEMS,
    ALIGN_CONTENT,
    JUSTIFY_ITEMS,
    JUSTIFY_CONTENT,
    FLEX_WRAP,
    FLEX_DIRECTION,
    FLEX,
    FLEX_GROW,
    FLEX_SHRINK,
    FLEX_BASIS,
    JUSTIFY_SELF,
    ALIGN_SELF,
    ORDER,
];

// Border

/// `border`, looked up in `borders`.
pub const BORDER_ALL: PropSpec = PropSpec::new("border", &["border"])
    .with_scale(ScaleKey::BORDERS)
    .with_unit(Unit::Px);
/// `borderX`: left and right borders.
pub const BORDER_X: PropSpec = PropSpec::new("borderX", &["border-left", "border-right"])
    .with_scale(ScaleKey::BORDERS)
    .with_unit(Unit::Px);
/// `borderY`: top and bottom borders.
pub const BORDER_Y: PropSpec = PropSpec::new("borderY", &["border-top", "border-bottom"])
    .with_scale(ScaleKey::BORDERS)
    .with_unit(Unit::Px);
/// `borderTop`.
pub const BORDER_TOP: PropSpec = PropSpec::new("borderTop", &["border-top"])
    .with_scale(ScaleKey::BORDERS)
    .with_unit(Unit::Px);
/// `borderRight`.
pub const BORDER_RIGHT: PropSpec = PropSpec::new("borderRight", &["border-right"])
    .with_scale(ScaleKey::BORDERS)
    .with_unit(Unit::Px);
/// `borderBottom`.
pub const BORDER_BOTTOM: PropSpec = PropSpec::new("borderBottom", &["border-bottom"])
    .with_scale(ScaleKey::BORDERS)
    .with_unit(Unit::Px);
/// `borderLeft`.
pub const BORDER_LEFT: PropSpec = PropSpec::new("borderLeft", &["border-left"])
    .with_scale(ScaleKey::BORDERS)
    .with_unit(Unit::Px);
/// `borderWidth`, looked up in `borderWidths`.
pub const BORDER_WIDTH: PropSpec = PropSpec::new("borderWidth", &["border-width"])
    .with_scale(ScaleKey::BORDER_WIDTHS)
    .with_unit(Unit::Px);
/// `borderStyle`, looked up in `borderStyles`.
pub const BORDER_STYLE: PropSpec =
    PropSpec::new("borderStyle", &["border-style"]).with_scale(ScaleKey::BORDER_STYLES);
/// `borderColor`, looked up in `colors`.
pub const BORDER_COLOR: PropSpec =
    PropSpec::new("borderColor", &["border-color"]).with_scale(ScaleKey::COLORS);
/// `borderRadius`, looked up in `radii`; bare numbers are pixels.
pub const BORDER_RADIUS: PropSpec = PropSpec::new("borderRadius", &["border-radius"])
    .with_scale(ScaleKey::RADII)
    .with_unit(Unit::Px);

/// Border props, shorthands first.
pub const BORDER: &[PropSpec] = &[
    BORDER_ALL,
    BORDER_X,
    BORDER_Y,
    BORDER_TOP,
    BORDER_RIGHT,
    BORDER_BOTTOM,
    BORDER_LEFT,
    BORDER_WIDTH,
    BORDER_STYLE,
    BORDER_COLOR,
    BORDER_RADIUS,
];

// Position

/// `position`.
pub const POSITION_MODE: PropSpec = plain("position", &["position"]);
/// `zIndex`, looked up in `zIndices`.
pub const Z_INDEX: PropSpec = PropSpec::new("zIndex", &["z-index"]).with_scale(ScaleKey::Z_INDICES);
/// `top`, looked up in `space`.
pub const TOP: PropSpec = padding("top", &["top"]);
/// `right`, looked up in `space`.
pub const RIGHT: PropSpec = padding("right", &["right"]);
/// `bottom`, looked up in `space`.
pub const BOTTOM: PropSpec = padding("bottom", &["bottom"]);
/// `left`, looked up in `space`.
pub const LEFT: PropSpec = padding("left", &["left"]);

/// Positioning props.
pub const POSITION: &[PropSpec] = &[POSITION_MODE, Z_INDEX, TOP, RIGHT, BOTTOM, LEFT];

// Shadow

/// `boxShadow`, looked up in `shadows`.
pub const BOX_SHADOW: PropSpec =
    PropSpec::new("boxShadow", &["box-shadow"]).with_scale(ScaleKey::SHADOWS);
/// `textShadow`, looked up in `shadows`.
pub const TEXT_SHADOW: PropSpec =
    PropSpec::new("textShadow", &["text-shadow"]).with_scale(ScaleKey::SHADOWS);

/// Shadow props.
pub const SHADOW: &[PropSpec] = &[BOX_SHADOW, TEXT_SHADOW];

// Background

/// `background`.
pub const BACKGROUND_ALL: PropSpec = plain("background", &["background"]);
/// `backgroundImage`, `bgImage`.
pub const BACKGROUND_IMAGE: PropSpec =
    plain("backgroundImage", &["background-image"]).with_aliases(&["bgImage"]);
/// `backgroundSize`, `bgSize`.
pub const BACKGROUND_SIZE: PropSpec =
    plain("backgroundSize", &["background-size"]).with_aliases(&["bgSize"]);
/// `backgroundPosition`, `bgPosition`.
pub const BACKGROUND_POSITION: PropSpec =
    plain("backgroundPosition", &["background-position"]).with_aliases(&["bgPosition"]);
/// `backgroundRepeat`, `bgRepeat`.
pub const BACKGROUND_REPEAT: PropSpec =
    plain("backgroundRepeat", &["background-repeat"]).with_aliases(&["bgRepeat"]);

/// Background props other than color.
pub const BACKGROUND: &[PropSpec] = &[
    BACKGROUND_ALL,
    BACKGROUND_IMAGE,
    BACKGROUND_SIZE,
    BACKGROUND_POSITION,
    BACKGROUND_REPEAT,
];

// Grid

/// `gridGap`, looked up in `space`.
pub const GRID_GAP: PropSpec = padding("gridGap", &["grid-gap"]);
/// `gridColumnGap`, looked up in `space`.
pub const GRID_COLUMN_GAP: PropSpec = padding("gridColumnGap", &["grid-column-gap"]);
/// `gridRowGap`, looked up in `space`.
pub const GRID_ROW_GAP: PropSpec = padding("gridRowGap", &["grid-row-gap"]);
/// `gridColumn`.
pub const GRID_COLUMN: PropSpec = plain("gridColumn", &["grid-column"]);
/// `gridRow`.
pub const GRID_ROW: PropSpec = plain("gridRow", &["grid-row"]);
/// `gridAutoFlow`.
pub const GRID_AUTO_FLOW: PropSpec = plain("gridAutoFlow", &["grid-auto-flow"]);
/// `gridAutoColumns`.
pub const GRID_AUTO_COLUMNS: PropSpec = plain("gridAutoColumns", &["grid-auto-columns"]);
/// `gridAutoRows`.
pub const GRID_AUTO_ROWS: PropSpec = plain("gridAutoRows", &["grid-auto-rows"]);
/// `gridTemplateColumns`.
pub const GRID_TEMPLATE_COLUMNS: PropSpec =
    plain("gridTemplateColumns", &["grid-template-columns"]);
/// `gridTemplateRows`.
pub const GRID_TEMPLATE_ROWS: PropSpec = plain("gridTemplateRows", &["grid-template-rows"]);
/// `gridTemplateAreas`.
pub const GRID_TEMPLATE_AREAS: PropSpec = plain("gridTemplateAreas", &["grid-template-areas"]);
/// `gridArea`.
pub const GRID_AREA: PropSpec = plain("gridArea", &["grid-area"]);

/// CSS grid props.
pub const GRID: &[PropSpec] = &[
    GRID_GAP,
    GRID_COLUMN_GAP,
    GRID_ROW_GAP,
    GRID_COLUMN,
    GRID_ROW,
    GRID_AUTO_FLOW,
    GRID_AUTO_COLUMNS,
    GRID_AUTO_ROWS,
    GRID_TEMPLATE_COLUMNS,
    GRID_TEMPLATE_ROWS,
    GRID_TEMPLATE_AREAS,
    GRID_AREA,
];

/// Every vocabulary, in the order [`PropRegistry::standard`] registers them.
///
/// [`PropRegistry::standard`]: crate::PropRegistry::standard
pub const ALL: &[&[PropSpec]] = &[
    SPACE, COLOR, LAYOUT, TYPOGRAPHY, FLEXBOX, BORDER, POSITION, SHADOW, BACKGROUND, GRID,
];

#[cfg(test)]
mod tests {
    use super::*;
    use propstyle_theme::{Scalar, Theme};

    #[test]
    fn flexbox_is_container_then_item() {
        let names: Vec<_> = FLEXBOX.iter().map(PropSpec::name).collect();
        let expected: Vec<_> = FLEX_CONTAINER
            .iter()
            .chain(FLEX_ITEM)
            .map(PropSpec::name)
            .collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn shorthands_precede_longhands() {
        let position = |name: &str| SPACE.iter().position(|s| s.name() == name);
        assert!(position("m") < position("mx"));
        assert!(position("mx") < position("mr"));
        assert!(position("p") < position("py"));
        assert!(position("py") < position("pt"));
    }

    #[test]
    fn margins_go_negative_paddings_do_not() {
        let theme = Theme::default();
        assert_eq!(MARGIN_TOP.resolve(&Scalar::from(-2), &theme).as_deref(), Some("-8px"));
        assert_eq!(PADDING_TOP.resolve(&Scalar::from(-2), &theme).as_deref(), Some("-2px"));
    }

    #[test]
    fn font_size_uses_font_scale() {
        let theme = Theme::default();
        assert_eq!(FONT_SIZE.resolve(&Scalar::from(4), &theme).as_deref(), Some("24px"));
        assert_eq!(
            FONT_SIZE.resolve(&Scalar::from("inherit"), &theme).as_deref(),
            Some("inherit")
        );
    }

    #[test]
    fn unitless_props_stay_bare() {
        let theme = Theme::default();
        assert_eq!(FONT_WEIGHT.resolve(&Scalar::from(700), &theme).as_deref(), Some("700"));
        assert_eq!(OPACITY.resolve(&Scalar::from(0.5), &theme).as_deref(), Some("0.5"));
        assert_eq!(FLEX.resolve(&Scalar::from(1), &theme).as_deref(), Some("1"));
    }
}
