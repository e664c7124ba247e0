//! Prepare-for-read hooks.

use attrgen_model::AttributeSet;

use crate::table::prepare_function;

/// Header prototypes for each attribute with `x-prepare`.
pub fn prepare_prototypes(set: &AttributeSet) -> String {
    set.attributes
        .iter()
        .filter(|attribute| attribute.prepare)
        .map(|attribute| format!("int {}(void);\n", prepare_function(attribute)))
        .collect()
}

/// Weak default bodies; the application overrides the ones it needs.
pub fn prepare_weak_implementations(set: &AttributeSet) -> String {
    set.attributes
        .iter()
        .filter(|attribute| attribute.prepare)
        .map(|attribute| {
            format!(
                "__weak int {}(void)\n{{\n\treturn 0;\n}}\n\n",
                prepare_function(attribute)
            )
        })
        .collect()
}
