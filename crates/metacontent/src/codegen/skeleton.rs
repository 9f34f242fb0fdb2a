//! The fixed document skeleton the segments are placed into.

use super::Segments;

/// Indentation of union constructors under `type ...`.
const UNION_INDENT: usize = 4;
/// Indentation of case arms under `case ... of`.
const ARM_INDENT: usize = 8;

/// Indents every non-empty line of `text` by `width` spaces.
pub(crate) fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Places the segments into the module skeleton.
pub fn assemble(segments: &Segments, module_name: &str) -> String {
    format!(
        r#"-- Generated by metacontent. Do not edit by hand; rerun `metacontent` instead.


module {module_name} exposing (..)

import Html
import MyCss
import Option exposing (Option)

{imports}



-- MODEL


type MultiModel
{state_union}


menuOptions : MultiModel -> List (Option MultiMsg)
menuOptions multiModel =
    case multiModel of
{menu_options}



-- UPDATE


type MultiMsg
{message_union}


mismatchError : String
mismatchError =
    "{module_name}.update msg model type mismatch"


update : MultiMsg -> MultiModel -> Maybe ( MultiModel, Cmd MultiMsg )
update multiMsg multiModel =
    case multiMsg of
{update}



-- VIEW


viewInside : ( Float, Float ) -> Float -> MultiModel -> Html.Html MultiMsg
viewInside pos radius multiModel =
    case multiModel of
{view_inside}


viewOutside : ( Float, Float ) -> Float -> MultiModel -> Html.Html MultiMsg
viewOutside pos radius multiModel =
    case multiModel of
{view_outside}



-- SUBSCRIPTIONS


subscriptions : MultiModel -> Sub MultiMsg
subscriptions multiModel =
    case multiModel of
{subscriptions}
"#,
        module_name = module_name,
        imports = segments.imports,
        state_union = indent(&segments.state_union, UNION_INDENT),
        menu_options = indent(&segments.menu_options, ARM_INDENT),
        message_union = indent(&segments.message_union, UNION_INDENT),
        update = indent(&segments.update, ARM_INDENT),
        view_inside = indent(&segments.view_inside, ARM_INDENT),
        view_outside = indent(&segments.view_outside, ARM_INDENT),
        subscriptions = indent(&segments.subscriptions, ARM_INDENT),
    )
}
