//! Per-operation segment templates.
//!
//! Each function maps one template over the registry, one entry per content
//! module, in registry order. Segments are produced without leading
//! indentation; the skeleton indents them into place.

use crate::registry::{ContentRegistry, Identifier};

/// Joins one rendering per identifier with newlines.
fn compose_part<F>(registry: &ContentRegistry, template: F) -> String
where
    F: Fn(&Identifier) -> String,
{
    registry
        .identifiers()
        .map(template)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Like `compose_part`, but prefixes the first entry with `= ` and every
/// following entry with `| `, forming the body of a union type declaration.
fn compose_union<F>(registry: &ContentRegistry, template: F) -> String
where
    F: Fn(&Identifier) -> String,
{
    registry
        .identifiers()
        .enumerate()
        .map(|(i, id)| {
            let token = if i == 0 { "= " } else { "| " };
            format!("{}{}", token, template(id))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `import <Namespace>.<Id> as <Id>` per module.
pub fn imports(registry: &ContentRegistry, namespace: &str) -> String {
    compose_part(registry, |id| {
        if namespace.is_empty() {
            format!("import {}", id)
        } else {
            format!("import {}.{} as {}", namespace, id, id)
        }
    })
}

/// Constructors of `MultiModel`, one wrapping each module's `Model`.
pub fn state_union(registry: &ContentRegistry) -> String {
    compose_union(registry, |id| format!("Mdl{0} {0}.Model", id))
}

/// Arms of `menuOptions`, lifting each option's message into `MultiMsg`.
pub fn menu_dispatch(registry: &ContentRegistry) -> String {
    compose_part(registry, |id| {
        format!(
            "Mdl{0} model ->\n    \
             {0}.menuOptions\n        \
             |> List.map (Option.map Msg{0})",
            id
        )
    })
}

/// Constructors of `MultiMsg`, one wrapping each module's `Msg`.
pub fn message_union(registry: &ContentRegistry) -> String {
    compose_union(registry, |id| format!("Msg{0} {0}.Msg", id))
}

/// Arms of `update`. A message only applies to the model of the same module;
/// any other pairing logs `mismatchError` and yields `Nothing`.
pub fn update_dispatch(registry: &ContentRegistry) -> String {
    compose_part(registry, |id| {
        format!(
            "Msg{0} action ->\n    \
             case multiModel of\n        \
             Mdl{0} model ->\n            \
             let\n                \
             ( model_, cmd ) =\n                    \
             {0}.update action model\n            \
             in\n            \
             Just ( Mdl{0} model_, Cmd.map Msg{0} cmd )\n\n        \
             _ ->\n            \
             Debug.log mismatchError Nothing",
            id
        )
    })
}

/// Arms of a view dispatcher calling `<Id>.<function> pos radius model`.
fn view_dispatch(registry: &ContentRegistry, function: &str) -> String {
    compose_part(registry, |id| {
        format!(
            "Mdl{0} model ->\n    \
             {0}.{1} pos radius model\n        \
             |> Html.map Msg{0}",
            id, function
        )
    })
}

/// Arms of `viewInside`.
pub fn view_inside_dispatch(registry: &ContentRegistry) -> String {
    view_dispatch(registry, "viewInside")
}

/// Arms of `viewOutside`.
pub fn view_outside_dispatch(registry: &ContentRegistry) -> String {
    view_dispatch(registry, "viewOutside")
}

/// Arms of `subscriptions`.
pub fn subscription_dispatch(registry: &ContentRegistry) -> String {
    compose_part(registry, |id| {
        format!(
            "Mdl{0} model ->\n    \
             {0}.subscriptions model\n        \
             |> Sub.map Msg{0}",
            id
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha_beta() -> ContentRegistry {
        ContentRegistry::from_names(["Beta", "Alpha"])
    }

    #[test]
    fn imports_one_line_per_module() {
        let code = imports(&alpha_beta(), "Content");
        assert_eq!(
            code,
            "import Content.Alpha as Alpha\nimport Content.Beta as Beta"
        );
    }

    #[test]
    fn imports_without_namespace() {
        let code = imports(&alpha_beta(), "");
        assert_eq!(code, "import Alpha\nimport Beta");
    }

    #[test]
    fn state_union_uses_opening_then_continuation_token() {
        assert_eq!(
            state_union(&alpha_beta()),
            "= MdlAlpha Alpha.Model\n| MdlBeta Beta.Model"
        );
    }

    #[test]
    fn message_union_uses_opening_then_continuation_token() {
        let registry = ContentRegistry::from_names(["Alpha", "Beta", "Gamma"]);
        assert_eq!(
            message_union(&registry),
            "= MsgAlpha Alpha.Msg\n| MsgBeta Beta.Msg\n| MsgGamma Gamma.Msg"
        );
    }

    #[test]
    fn single_module_union_has_only_opening_token() {
        let registry = ContentRegistry::from_names(["Solo"]);
        assert_eq!(state_union(&registry), "= MdlSolo Solo.Model");
        assert_eq!(message_union(&registry), "= MsgSolo Solo.Msg");
    }

    #[test]
    fn empty_registry_composes_empty_segments() {
        let registry = ContentRegistry::default();
        assert_eq!(imports(&registry, "Content"), "");
        assert_eq!(state_union(&registry), "");
        assert_eq!(menu_dispatch(&registry), "");
        assert_eq!(message_union(&registry), "");
        assert_eq!(update_dispatch(&registry), "");
        assert_eq!(view_inside_dispatch(&registry), "");
        assert_eq!(view_outside_dispatch(&registry), "");
        assert_eq!(subscription_dispatch(&registry), "");
    }

    #[test]
    fn menu_dispatch_lifts_options() {
        let code = menu_dispatch(&ContentRegistry::from_names(["Clock"]));
        assert_eq!(
            code,
            "MdlClock model ->\n    Clock.menuOptions\n        |> List.map (Option.map MsgClock)"
        );
    }

    #[test]
    fn update_dispatch_has_matched_arm_and_mismatch_fallback() {
        let code = update_dispatch(&alpha_beta());

        assert!(code.contains("MsgAlpha action ->"));
        assert!(code.contains("MsgBeta action ->"));
        assert!(code.contains("Alpha.update action model"));
        assert!(code.contains("Beta.update action model"));
        assert!(code.contains("Just ( MdlAlpha model_, Cmd.map MsgAlpha cmd )"));
        assert!(code.contains("Just ( MdlBeta model_, Cmd.map MsgBeta cmd )"));
        assert_eq!(code.matches("Debug.log mismatchError Nothing").count(), 2);
    }

    #[test]
    fn view_dispatchers_call_the_right_function() {
        let registry = ContentRegistry::from_names(["Clock"]);
        assert!(view_inside_dispatch(&registry).contains("Clock.viewInside pos radius model"));
        assert!(view_outside_dispatch(&registry).contains("Clock.viewOutside pos radius model"));
        assert!(view_inside_dispatch(&registry).ends_with("|> Html.map MsgClock"));
    }

    #[test]
    fn subscription_dispatch_lifts_subscriptions() {
        let code = subscription_dispatch(&ContentRegistry::from_names(["Clock"]));
        assert_eq!(
            code,
            "MdlClock model ->\n    Clock.subscriptions model\n        |> Sub.map MsgClock"
        );
    }

    #[test]
    fn every_segment_has_one_entry_per_module() {
        let registry = ContentRegistry::from_names(["A", "B", "C", "D"]);
        let n = registry.len();

        assert_eq!(imports(&registry, "Content").lines().count(), n);
        assert_eq!(state_union(&registry).lines().count(), n);
        assert_eq!(message_union(&registry).lines().count(), n);
        assert_eq!(menu_dispatch(&registry).matches(" model ->").count(), n);
        assert_eq!(update_dispatch(&registry).matches(" action ->").count(), n);
        assert_eq!(view_inside_dispatch(&registry).matches(" model ->").count(), n);
        assert_eq!(view_outside_dispatch(&registry).matches(" model ->").count(), n);
        assert_eq!(subscription_dispatch(&registry).matches(" model ->").count(), n);
    }
}
