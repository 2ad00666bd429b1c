use crate::FieldDescriptor;
use crate::QueryWriter;
use crate::TypeDescriptor;

/// Emit the selection for one field labelled `label` (its name plus any
/// argument annotation) of type `ty`.
///
/// Rules are applied in order:
///
/// 1. A [`TypeDescriptor::Connection`] selects its members directly in the
///    current scope.
/// 2. A [`TypeDescriptor::Custom`] renderer decides on its own output. If it
///    fails, anything it wrote is discarded and the field is left out of the
///    query; compilation of the remaining fields continues.
/// 3. A [`TypeDescriptor::List`] renders as its element type.
/// 4. A [`TypeDescriptor::Object`] opens a `label {` scope around its
///    members.
/// 5. A [`TypeDescriptor::Scalar`] is a single `label` line.
pub fn compile_field(writer: &mut QueryWriter, label: &str, ty: &TypeDescriptor) {
    match ty {
        TypeDescriptor::Connection(fields) => {
            compile_members(writer, &fields.resolve());
        },

        TypeDescriptor::Custom(render) => {
            let checkpoint = writer.checkpoint();
            if render(writer, label).is_err() {
                writer.rollback(checkpoint);
            }
        },

        TypeDescriptor::List(element) => compile_field(writer, label, element),

        TypeDescriptor::Object(fields) => {
            let fields = fields.resolve();
            writer.scope(label, |writer| compile_members(writer, &fields));
        },

        TypeDescriptor::Scalar => writer.write_line(&[label]),
    }
}

/// Emit every field in `fields`, in order, at the writer's current level.
pub fn compile_members(writer: &mut QueryWriter, fields: &[FieldDescriptor]) {
    for field in fields {
        compile_field(writer, &field.label(), field.type_descriptor());
    }
}
