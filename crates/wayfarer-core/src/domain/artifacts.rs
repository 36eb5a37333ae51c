//! Entity artifact rendering.
//!
//! Pure string builders that turn an [`EntityDefinition`] into the generated
//! output: the data-access module, the schema-type module, and the five
//! snippets spliced into the shared schema and project-manifest files.
//! Everything here is deterministic text generation; file I/O belongs to the
//! application layer.

use crate::domain::entity::EntityDefinition;

// ── Splice markers ────────────────────────────────────────────────────────────

/// Marker for the entity import lines in the shared schema module.
pub const NEEDLE_IMPORT: &str = "wayfarer-needle-import-entity-to-schema";
/// Marker for query resolver entries in the shared schema module.
pub const NEEDLE_QUERY: &str = "wayfarer-needle-insert-entity-query-to-schema";
/// Marker for mutation resolver entries in the shared schema module.
pub const NEEDLE_MUTATION: &str = "wayfarer-needle-insert-entity-mutation-to-schema";
/// Marker for access-policy statements in the project manifest.
pub const NEEDLE_POLICY: &str = "wayfarer-needle-add-entity-to-list";
/// Marker for table-definition resources in the project manifest.
pub const NEEDLE_TABLE: &str = "wayfarer-needle-add-entity-dynamo";

/// Shared schema module path, relative to the project root.
pub const SCHEMA_FILE: &str = "data/lib/schema.js";
/// Project manifest path, relative to the project root.
pub const MANIFEST_FILE: &str = "s-project.json";

// ── Field fragments ───────────────────────────────────────────────────────────

/// Render the fields as a record built from resolver arguments:
/// `{\n    name: args.name,\n    ...\n  }`.
pub fn fields_as_args(def: &EntityDefinition) -> String {
    let mut out = String::from("{\n");
    for (idx, field) in def.fields.iter().enumerate() {
        out.push_str(&format!("    {0}: args.{0}", field.field_name));
        out.push_str(if idx + 1 < def.fields.len() { ",\n" } else { "\n" });
    }
    out.push_str("  }");
    out
}

/// Render the field names as a quoted list: `['a', 'b']`.
pub fn fields_as_list(def: &EntityDefinition) -> String {
    let names: Vec<String> = def
        .fields
        .iter()
        .map(|f| format!("'{}'", f.field_name))
        .collect();
    format!("[{}]", names.join(", "))
}

/// Render the GraphQL field map at the given indent depth:
/// `{\n    name: { type: GraphQLString },\n  }`-shaped.
pub fn entity_fields(def: &EntityDefinition, indent: usize) -> String {
    let inner = " ".repeat(indent + 2);
    let closing = " ".repeat(indent);
    let mut out = String::from("{\n");
    for (idx, field) in def.fields.iter().enumerate() {
        out.push_str(&format!(
            "{inner}{}: {{ type: {} }}",
            field.field_name,
            field.field_type.graphql_type()
        ));
        out.push_str(if idx + 1 < def.fields.len() { ",\n" } else { "\n" });
    }
    out.push_str(&format!("{closing}}}"));
    out
}

// ── Entity modules ────────────────────────────────────────────────────────────

/// Render the data-access module, `data/lib/<Entity>Dynamo.js`.
///
/// Exposes `get<Entity>`, `new<Entity>`, and the `args<Entity>` argument map
/// consumed by the mutation resolver.  When the entity has no fields the
/// lookup key is omitted and the argument map is empty.
pub fn dynamo_module(def: &EntityDefinition) -> String {
    let class = def.entity_class();
    let instance = def.entity_instance();

    let key_clause = match def.key_field() {
        Some(key) => format!("    Key: {{\n      {}: key\n    }},\n", key.field_name),
        None => "    Key: {},\n".to_string(),
    };

    let mut args_entries = String::new();
    for (idx, field) in def.fields.iter().enumerate() {
        args_entries.push_str(&format!(
            "  {}: {{ type: {} }}",
            field.field_name,
            field.field_type.graphql_type()
        ));
        args_entries.push_str(if idx + 1 < def.fields.len() { ",\n" } else { "\n" });
    }
    let args_block = if def.fields.is_empty() {
        "{};".to_string()
    } else {
        format!("{{\n{args_entries}}};")
    };

    format!(
        "import Promise from 'bluebird';\n\
         import AWS from 'aws-sdk';\n\
         import {{\n\
         \x20 GraphQLString,\n\
         \x20 GraphQLInt,\n\
         \x20 GraphQLFloat,\n\
         \x20 GraphQLBoolean,\n\
         \x20 GraphQLNonNull,\n\
         \x20 GraphQLEnumType\n\
         }} from 'graphql';\n\
         import {{\n\
         \x20 GraphQLDateTime\n\
         }} from 'graphql-custom-types';\n\
         \n\
         const dynamoConfig = {{\n\
         \x20 sessionToken: process.env.AWS_SESSION_TOKEN,\n\
         \x20 region: process.env.AWS_REGION\n\
         }};\n\
         const docClient = new AWS.DynamoDB.DocumentClient(dynamoConfig);\n\
         const stage = process.env.SERVERLESS_STAGE;\n\
         const projectName = process.env.SERVERLESS_PROJECT_NAME;\n\
         const tableName = projectName + '-{class}-' + stage;\n\
         \n\
         export const args{class} = {args_block}\n\
         \n\
         function params{class}(key) {{\n\
         \x20 return {{\n\
         \x20   TableName: tableName,\n\
         {key_clause}\
         \x20   AttributesToGet: {attributes}\n\
         \x20 }};\n\
         }}\n\
         \n\
         export function get{class}(key) {{\n\
         \x20 return new Promise(function(resolve, reject) {{\n\
         \n\
         \x20   docClient.get(params{class}(key), function(err, data) {{\n\
         \x20     if (err) {{\n\
         \x20       return reject(err);\n\
         \x20     }}\n\
         \x20     return resolve(data['Item']);\n\
         \x20   }});\n\
         \n\
         \x20 }});\n\
         }}\n\
         \n\
         export function new{class}(source, args) {{\n\
         \x20 var {instance} = {fields_as_args};\n\
         \n\
         \x20 return new Promise(function(resolve, reject) {{\n\
         \n\
         \x20   var params = {{\n\
         \x20     TableName: tableName,\n\
         \x20     Item: {instance}\n\
         \x20   }};\n\
         \n\
         \x20   docClient.put(params, function(err, data) {{\n\
         \x20     if (err) {{\n\
         \x20       return reject(err);\n\
         \x20     }}\n\
         \x20     return resolve({instance});\n\
         \x20   }});\n\
         \n\
         \x20 }});\n\
         }}\n",
        class = class,
        instance = instance,
        args_block = args_block,
        key_clause = key_clause,
        attributes = fields_as_list(def),
        fields_as_args = fields_as_args(def),
    )
}

/// Render the schema-type module, `data/lib/<Entity>Schema.js`.
pub fn schema_module(def: &EntityDefinition) -> String {
    let class = def.entity_class();
    format!(
        "import {{\n\
         \x20 GraphQLObjectType,\n\
         \x20 GraphQLString,\n\
         \x20 GraphQLNonNull,\n\
         \x20 GraphQLInt,\n\
         \x20 GraphQLFloat,\n\
         \x20 GraphQLBoolean,\n\
         \x20 GraphQLEnumType\n\
         }} from 'graphql';\n\
         \n\
         import {{\n\
         \x20 GraphQLLimitedString,\n\
         \x20 GraphQLDateTime\n\
         }} from 'graphql-custom-types';\n\
         \n\
         const {class} = new GraphQLObjectType({{\n\
         \x20 name: '{class}',\n\
         \x20 description: '{class} entity',\n\
         \x20 fields: () => ({fields})\n\
         }});\n\
         \n\
         export default {class};\n",
        class = class,
        fields = entity_fields(def, 2),
    )
}

// ── Splice snippets ───────────────────────────────────────────────────────────

/// Import lines added to the shared schema module.
pub fn import_snippet(def: &EntityDefinition) -> Vec<String> {
    let class = def.entity_class();
    vec![
        format!("import {class} from './{class}Schema';"),
        format!("import {{ get{class}, new{class}, args{class} }} from './{class}Dynamo';"),
        String::new(),
    ]
}

/// Query resolver entry for the shared schema module.
///
/// When the entity has no fields (and therefore no key field), the lookup
/// argument falls back to `id` so the generated schema still parses.
pub fn query_snippet(def: &EntityDefinition) -> Vec<String> {
    let class = def.entity_class();
    let instance = def.entity_instance();
    let key_name = def
        .key_field()
        .map(|f| f.field_name.clone())
        .unwrap_or_else(|| "id".to_string());
    vec![
        format!("{instance}: {{"),
        format!("  type: {class},"),
        format!("  description: 'Get {class} by {key_name}',"),
        "  args: {".to_string(),
        format!("    {key_name}: {{ type: new GraphQLNonNull(GraphQLString) }}"),
        "  },".to_string(),
        format!("  resolve: function(source, {{{key_name}}}) {{"),
        format!("    return get{class}({key_name});"),
        "  }".to_string(),
        "},".to_string(),
    ]
}

/// Mutation resolver entry for the shared schema module.
pub fn mutation_snippet(def: &EntityDefinition) -> Vec<String> {
    let class = def.entity_class();
    vec![
        format!("new{class}: {{"),
        format!("  type: {class},"),
        format!("  description: 'Create a {class}',"),
        format!("  args: args{class},"),
        format!("  resolve: new{class}"),
        "},".to_string(),
    ]
}

/// Access-policy statement for the project manifest.
pub fn policy_snippet(def: &EntityDefinition) -> Vec<String> {
    let class = def.entity_class();
    vec![
        ",".to_string(),
        "{".to_string(),
        "\"Effect\": \"Allow\",".to_string(),
        "\"Action\": [".to_string(),
        "  \"*\"".to_string(),
        "],".to_string(),
        format!(
            "\"Resource\": \"arn:aws:dynamodb:${{region}}:*:table/${{project}}-{class}-${{stage}}\""
        ),
        "}".to_string(),
    ]
}

/// Table-definition resource for the project manifest.
///
/// The attribute and key schema blocks are emitted only when the entity has
/// a key field; the attribute type comes from the fixed storage-type table.
pub fn table_snippet(def: &EntityDefinition) -> Vec<String> {
    let class = def.entity_class();
    let mut parts = vec![
        ",".to_string(),
        format!("\"{class}Dynamo\": {{"),
        "  \"Type\": \"AWS::DynamoDB::Table\",".to_string(),
        "  \"DeletionPolicy\": \"Retain\",".to_string(),
        "  \"Properties\": {".to_string(),
        "    \"AttributeDefinitions\": [".to_string(),
    ];
    if let Some(key) = def.key_field() {
        parts.extend([
            "      {".to_string(),
            format!("        \"AttributeName\": \"{}\",", key.field_name),
            format!(
                "        \"AttributeType\": \"{}\"",
                key.field_type.storage_attribute_type()
            ),
            "      }".to_string(),
            "    ],".to_string(),
            "    \"KeySchema\": [".to_string(),
            "      {".to_string(),
            format!("        \"AttributeName\": \"{}\",", key.field_name),
            "        \"KeyType\": \"HASH\"".to_string(),
            "      }".to_string(),
            "    ],".to_string(),
        ]);
    } else {
        parts.push("    ],".to_string());
    }
    parts.extend([
        "    \"ProvisionedThroughput\": {".to_string(),
        "      \"ReadCapacityUnits\": 1,".to_string(),
        "      \"WriteCapacityUnits\": 1".to_string(),
        "    },".to_string(),
        format!("    \"TableName\": \"${{project}}-{class}-${{stage}}\""),
        "  }".to_string(),
        "}".to_string(),
    ]);
    parts
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::{EntityDefinition, Field, FieldType};

    fn order_with_amount() -> EntityDefinition {
        let mut def = EntityDefinition::new("order");
        def.add_field(Field::new("amount", FieldType::BigDecimal))
            .unwrap();
        def
    }

    fn empty_foo() -> EntityDefinition {
        EntityDefinition::new("foo")
    }

    #[test]
    fn fields_as_args_shape() {
        let mut def = order_with_amount();
        def.add_field(Field::new("note", FieldType::String)).unwrap();
        assert_eq!(
            fields_as_args(&def),
            "{\n    amount: args.amount,\n    note: args.note\n  }"
        );
    }

    #[test]
    fn fields_as_list_shape() {
        let mut def = order_with_amount();
        def.add_field(Field::new("note", FieldType::String)).unwrap();
        assert_eq!(fields_as_list(&def), "['amount', 'note']");
        assert_eq!(fields_as_list(&empty_foo()), "[]");
    }

    #[test]
    fn entity_fields_maps_types_through_graphql_table() {
        let def = order_with_amount();
        assert_eq!(
            entity_fields(&def, 2),
            "{\n    amount: { type: GraphQLFloat }\n  }"
        );
    }

    #[test]
    fn entity_fields_empty_list() {
        assert_eq!(entity_fields(&empty_foo(), 2), "{\n  }");
    }

    #[test]
    fn schema_module_declares_mapped_field() {
        let out = schema_module(&order_with_amount());
        assert!(out.contains("const Order = new GraphQLObjectType({"));
        assert!(out.contains("amount: { type: GraphQLFloat }"));
        assert!(out.contains("export default Order;"));
    }

    #[test]
    fn schema_module_for_empty_entity_has_empty_field_map() {
        let out = schema_module(&empty_foo());
        assert!(out.contains("const Foo = new GraphQLObjectType({"));
        assert!(out.contains("fields: () => ({\n  })"));
    }

    #[test]
    fn dynamo_module_uses_key_field() {
        let out = dynamo_module(&order_with_amount());
        assert!(out.contains("const tableName = projectName + '-Order-' + stage;"));
        assert!(out.contains("Key: {\n      amount: key\n    },"));
        assert!(out.contains("AttributesToGet: ['amount']"));
        assert!(out.contains("export function getOrder(key)"));
        assert!(out.contains("export const argsOrder = {\n  amount: { type: GraphQLFloat }\n};"));
    }

    #[test]
    fn dynamo_module_without_fields_omits_key() {
        let out = dynamo_module(&empty_foo());
        assert!(out.contains("Key: {},"));
        assert!(out.contains("AttributesToGet: []"));
        assert!(out.contains("export const argsFoo = {};"));
    }

    #[test]
    fn query_snippet_names_the_key() {
        let lines = query_snippet(&order_with_amount());
        assert_eq!(lines[0], "order: {");
        assert!(lines.iter().any(|l| l.contains("Get Order by amount")));
        assert!(lines.iter().any(|l| l.contains("return getOrder(amount);")));
        assert_eq!(lines.last().unwrap(), "},");
    }

    #[test]
    fn table_snippet_maps_key_type_to_storage_code() {
        let lines = table_snippet(&order_with_amount());
        assert!(lines.iter().any(|l| l.contains("\"AttributeType\": \"N\"")));
        assert!(lines.iter().any(|l| l.contains("\"AttributeName\": \"amount\"")));
        assert!(
            lines
                .iter()
                .any(|l| l.contains("\"TableName\": \"${project}-Order-${stage}\""))
        );
    }

    #[test]
    fn table_snippet_without_key_omits_key_schema() {
        let lines = table_snippet(&empty_foo());
        assert!(!lines.iter().any(|l| l.contains("KeySchema")));
        assert!(lines.iter().any(|l| l.contains("\"FooDynamo\": {")));
    }

    #[test]
    fn import_snippet_references_both_modules() {
        let lines = import_snippet(&order_with_amount());
        assert_eq!(lines[0], "import Order from './OrderSchema';");
        assert_eq!(
            lines[1],
            "import { getOrder, newOrder, argsOrder } from './OrderDynamo';"
        );
    }

    #[test]
    fn mutation_snippet_wires_args_and_resolver() {
        let lines = mutation_snippet(&order_with_amount());
        assert!(lines.iter().any(|l| l.contains("args: argsOrder,")));
        assert!(lines.iter().any(|l| l.contains("resolve: newOrder")));
    }
}
