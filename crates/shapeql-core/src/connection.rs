use crate::BindError;
use crate::FieldDescriptor;
use crate::Fields;
use crate::Shape;
use crate::TypeDescriptor;
use crate::bind;
use serde_json::Map;
use serde_json::Value;

/// The `totalCount` and `pageInfo` members of a paginated connection.
///
/// Embed it as a member of a connection shape next to that shape's `edges`;
/// its members are selected and bound as if they had been declared on the
/// enclosing shape:
///
/// ```text
/// friendsConnection(first: 2) {
///   edges { node { name } cursor }
///   totalCount
///   pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Connection {
    pub total_count: i64,
    pub page_info: PageInfo,
}
impl Shape for Connection {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::Connection(Fields::Static(Self::field_descriptors))
    }

    fn field_descriptors() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("TotalCount", i64::type_descriptor()),
            FieldDescriptor::new("PageInfo", PageInfo::type_descriptor()),
        ]
    }

    fn bind_value(&mut self, value: &Value) -> Result<(), BindError> {
        bind::bind_object(self, value)
    }

    fn bind_members(
        &mut self,
        members: &Map<String, Value>,
    ) -> Result<(), BindError> {
        bind::bind_member(&mut self.total_count, "TotalCount", members)?;
        bind::bind_member(&mut self.page_info, "PageInfo", members)?;
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: String,
    pub end_cursor: String,
}
impl Shape for PageInfo {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::Object(Fields::Static(Self::field_descriptors))
    }

    fn field_descriptors() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("HasNextPage", bool::type_descriptor()),
            FieldDescriptor::new("HasPreviousPage", bool::type_descriptor()),
            FieldDescriptor::new("StartCursor", String::type_descriptor()),
            FieldDescriptor::new("EndCursor", String::type_descriptor()),
        ]
    }

    fn bind_value(&mut self, value: &Value) -> Result<(), BindError> {
        bind::bind_object(self, value)
    }

    fn bind_members(
        &mut self,
        members: &Map<String, Value>,
    ) -> Result<(), BindError> {
        bind::bind_member(&mut self.has_next_page, "HasNextPage", members)?;
        bind::bind_member(&mut self.has_previous_page, "HasPreviousPage", members)?;
        bind::bind_member(&mut self.start_cursor, "StartCursor", members)?;
        bind::bind_member(&mut self.end_cursor, "EndCursor", members)?;
        Ok(())
    }
}

/// One element of a connection's `edges` list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Edge<N> {
    pub node: N,
    pub cursor: String,
}
impl<N: Shape + Default> Shape for Edge<N> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::Object(Fields::Static(Self::field_descriptors))
    }

    fn field_descriptors() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("Node", N::type_descriptor()),
            FieldDescriptor::new("Cursor", String::type_descriptor()),
        ]
    }

    fn bind_value(&mut self, value: &Value) -> Result<(), BindError> {
        bind::bind_object(self, value)
    }

    fn bind_members(
        &mut self,
        members: &Map<String, Value>,
    ) -> Result<(), BindError> {
        bind::bind_member(&mut self.node, "Node", members)?;
        bind::bind_member(&mut self.cursor, "Cursor", members)?;
        Ok(())
    }
}
