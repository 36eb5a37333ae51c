//! Built-in application templates.
//!
//! The fixed file set emitted by `wayfarer app`, covering the original
//! common/data/ping/gulp module generators.  Bodies use `{{VARIABLE}}`
//! placeholders rendered through the project context; the shared schema
//! module and project manifest carry the needle lines the entity generator
//! splices into.

use wayfarer_core::application::TemplateFile;

/// Every file written by `wayfarer app`, in write order.
pub fn app_templates() -> &'static [TemplateFile] {
    APP_TEMPLATES
}

const APP_TEMPLATES: &[TemplateFile] = &[
    // ── common ────────────────────────────────────────────────────────────
    TemplateFile {
        path: ".eslintignore",
        body: "node_modules/**\n_meta/**\n",
    },
    TemplateFile {
        path: ".eslintrc",
        body: r#"{
  "parserOptions": {
    "ecmaVersion": 6,
    "sourceType": "module"
  },
  "env": {
    "node": true,
    "es6": true
  },
  "extends": "eslint:recommended",
  "rules": {
    "semi": ["error", "always"],
    "quotes": ["error", "single"],
    "no-console": "off"
  }
}
"#,
    },
    TemplateFile {
        path: ".gitignore",
        body: "node_modules/\n_meta/\nadmin.env\n.env\n*.log\n",
    },
    TemplateFile {
        path: "package.json",
        body: r#"{
  "name": "{{BASE_NAME_KEBAB}}",
  "version": "0.0.1",
  "description": "{{BASE_NAME_CAPITALIZED}} serverless GraphQL application",
  "private": true,
  "devDependencies": {
    "eslint": "^2.4.0",
    "gulp": "^3.9.1",
    "gulp-eslint": "^2.0.0",
    "gulp-if": "^2.0.0",
    "gulp-jsonlint": "^1.1.2",
    "gulp-load-plugins": "^1.2.0",
    "require-dir": "^0.3.0",
    "serverless": "^0.5.5"
  }
}
"#,
    },
    TemplateFile {
        path: "README.md",
        body: r#"# {{BASE_NAME_CAPITALIZED}}

Serverless GraphQL application generated by Wayfarer.

## Getting started

    npm install
    gulp install

## Layout

- `data/` — GraphQL schema, resolvers and DynamoDB accessors
- `ping/` — health-check function
- `s-project.json` — project manifest and table definitions

Deployed to region `{{AWS_REGION}}`; operational notifications go to
`{{NOTIFICATION_EMAIL}}`.
"#,
    },
    TemplateFile {
        path: "s-project.json",
        body: r#"{
  "name": "{{BASE_NAME_KEBAB}}",
  "custom": {},
  "plugins": [],
  "cloudFormation": {
    "AWSTemplateFormatVersion": "2010-09-09",
    "Description": "{{BASE_NAME_CAPITALIZED}} application resources",
    "Resources": {
      "IamRoleLambda": {
        "Type": "AWS::IAM::Role",
        "Properties": {
          "AssumeRolePolicyDocument": {
            "Version": "2012-10-17",
            "Statement": [
              {
                "Effect": "Allow",
                "Principal": {
                  "Service": ["lambda.amazonaws.com"]
                },
                "Action": ["sts:AssumeRole"]
              }
            ]
          },
          "Path": "/"
        }
      },
      "IamPolicyLambda": {
        "Type": "AWS::IAM::Policy",
        "Properties": {
          "PolicyName": "{{BASE_NAME_KEBAB}}-lambda",
          "PolicyDocument": {
            "Version": "2012-10-17",
            "Statement": [
              {
                "Effect": "Allow",
                "Action": [
                  "logs:CreateLogGroup",
                  "logs:CreateLogStream",
                  "logs:PutLogEvents"
                ],
                "Resource": "arn:aws:logs:${region}:*:*"
              }
              //wayfarer-needle-add-entity-to-list
            ]
          },
          "Roles": [
            {
              "Ref": "IamRoleLambda"
            }
          ]
        }
      }
      //wayfarer-needle-add-entity-dynamo
    },
    "Outputs": {
      "IamRoleArnLambda": {
        "Description": "ARN of the lambda IAM role",
        "Value": {
          "Fn::GetAtt": ["IamRoleLambda", "Arn"]
        }
      }
    }
  }
}
"#,
    },
    TemplateFile {
        path: "serverless.json",
        body: r#"{
  "name": "{{BASE_NAME_KEBAB}}",
  "stage": "dev",
  "region": "{{AWS_REGION}}",
  "notificationEmail": "{{NOTIFICATION_EMAIL}}"
}
"#,
    },
    // ── data ──────────────────────────────────────────────────────────────
    TemplateFile {
        path: "data/lib/index.js",
        body: r#"import { graphql } from 'graphql';
import schema from './schema';

export function run(event, context, done) {
  graphql(schema, event.query)
    .then(function(result) {
      if (result.errors) {
        return done(result.errors);
      }
      return done(null, result.data);
    })
    .catch(done);
}
"#,
    },
    TemplateFile {
        path: "data/lib/schema.js",
        body: r#"import {
  GraphQLObjectType,
  GraphQLSchema,
  GraphQLString,
  GraphQLNonNull
} from 'graphql';

//wayfarer-needle-import-entity-to-schema

const Query = new GraphQLObjectType({
  name: '{{BASE_NAME_CAPITALIZED}}Schema',
  description: 'Root of the {{BASE_NAME_CAPITALIZED}} Schema',
  fields: () => ({
    //wayfarer-needle-insert-entity-query-to-schema
  })
});

const Mutation = new GraphQLObjectType({
  name: '{{BASE_NAME_CAPITALIZED}}Mutations',
  description: '{{BASE_NAME_CAPITALIZED}} Mutations',
  fields: {
    //wayfarer-needle-insert-entity-mutation-to-schema
  }
});

const Schema = new GraphQLSchema({
  query: Query,
  mutation: Mutation
});

export default Schema;
"#,
    },
    TemplateFile {
        path: "data/gql/event.json",
        body: "{\n  \"query\": \"\"\n}\n",
    },
    TemplateFile {
        path: "data/gql/handler.js",
        body: r#"'use strict';

var lib = require('../lib');

module.exports.handler = function(event, context) {
  lib.run(event, context, function(error, response) {
    return context.done(error, response);
  });
};
"#,
    },
    TemplateFile {
        path: "data/gql/s-function.json",
        body: r#"{
  "name": "gql",
  "runtime": "nodejs4.3",
  "handler": "gql/handler.handler",
  "timeout": 6,
  "memorySize": 1024,
  "endpoints": [
    {
      "path": "gql",
      "method": "POST",
      "type": "AWS",
      "requestTemplates": {
        "application/json": "{\"query\": $input.json('$.query')}"
      },
      "responses": {
        "default": {
          "statusCode": "200"
        }
      }
    }
  ],
  "environment": {
    "SERVERLESS_PROJECT_NAME": "${project}",
    "SERVERLESS_STAGE": "${stage}",
    "SERVERLESS_REGION": "${region}"
  }
}
"#,
    },
    TemplateFile {
        path: "data/package.json",
        body: r#"{
  "name": "{{BASE_NAME_KEBAB}}-data",
  "version": "0.0.1",
  "private": true,
  "dependencies": {
    "aws-sdk": "^2.2.43",
    "bluebird": "^3.3.4",
    "graphql": "^0.4.18",
    "graphql-custom-types": "^0.3.6"
  }
}
"#,
    },
    TemplateFile {
        path: "data/s-component.json",
        body: r#"{
  "name": "data",
  "runtime": "nodejs4.3",
  "custom": {}
}
"#,
    },
    // ── ping ──────────────────────────────────────────────────────────────
    TemplateFile {
        path: "ping/lib/index.js",
        body: r#"export function ping(event, context, done) {
  return done(null, { pong: new Date().toISOString() });
}
"#,
    },
    TemplateFile {
        path: "ping/ping/event.json",
        body: "{}\n",
    },
    TemplateFile {
        path: "ping/ping/handler.js",
        body: r#"'use strict';

var lib = require('../lib');

module.exports.handler = function(event, context) {
  lib.ping(event, context, function(error, response) {
    return context.done(error, response);
  });
};
"#,
    },
    TemplateFile {
        path: "ping/ping/s-function.json",
        body: r#"{
  "name": "ping",
  "runtime": "nodejs4.3",
  "handler": "ping/handler.handler",
  "timeout": 6,
  "memorySize": 128,
  "endpoints": [
    {
      "path": "ping",
      "method": "GET",
      "type": "AWS",
      "responses": {
        "default": {
          "statusCode": "200"
        }
      }
    }
  ],
  "environment": {
    "SERVERLESS_PROJECT_NAME": "${project}",
    "SERVERLESS_STAGE": "${stage}",
    "SERVERLESS_REGION": "${region}"
  }
}
"#,
    },
    TemplateFile {
        path: "ping/package.json",
        body: r#"{
  "name": "{{BASE_NAME_KEBAB}}-ping",
  "version": "0.0.1",
  "private": true,
  "dependencies": {}
}
"#,
    },
    TemplateFile {
        path: "ping/s-component.json",
        body: r#"{
  "name": "ping",
  "runtime": "nodejs4.3",
  "custom": {}
}
"#,
    },
    // ── gulp ──────────────────────────────────────────────────────────────
    TemplateFile {
        path: "gulpfile.js",
        body: r#"'use strict';

var gulp = require('gulp');

gulp.paths = {
  jsFiles: ['gulpfile.js', 'gulp/**/*.js', 'data/lib/**/*.js', 'ping/lib/**/*.js'],
  jsonFiles: ['*.json', 'data/**/*.json', 'ping/**/*.json']
};

require('require-dir')('./gulp');

gulp.task('default', ['lint']);
"#,
    },
    TemplateFile {
        path: "gulp/linting.js",
        body: r#"'use strict';

var gulp = require('gulp');
var paths = gulp.paths;
var $ = require('gulp-load-plugins')();

gulp.task('lint', ['eslint', 'jsonlint']);
gulp.task('lint-throw', ['eslint-throw', 'jsonlint-throw']);

var eslint = function(fail) {
  return function() {
    return gulp.src(paths.jsFiles)
      .pipe($.eslint())
      .pipe($.eslint.format())
      .pipe($.if(fail, $.eslint.failOnError()));
  };
};
gulp.task('eslint', eslint());
gulp.task('eslint-throw', eslint(true));

var jsonlint = function(fail) {
  var failReporter = function(file) {
    throw new Error(file.path + '\n' + file.jsonlint.message);
  };
  return function() {
    return gulp.src(paths.jsonFiles)
      .pipe($.jsonlint())
      .pipe($.jsonlint.reporter(fail ? failReporter : undefined));
  };
};
gulp.task('jsonlint', jsonlint());
gulp.task('jsonlint-throw', jsonlint(true));
"#,
    },
    TemplateFile {
        path: "gulp/serverless.js",
        body: r#"'use strict';

var gulp = require('gulp');
var spawn = require('child_process').spawn;

gulp.task('install', ['lint-throw'], function(done) {
  var install = spawn('npm', ['install'], { stdio: 'inherit' });
  install.on('close', done);
});

gulp.task('dash', function(done) {
  var dash = spawn('serverless', ['dash', 'deploy'], { stdio: 'inherit' });
  dash.on('close', done);
});
"#,
    },
];

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::domain::{ProjectContext, ProjectSettings, artifacts};

    fn rendered(path: &str) -> String {
        let mut settings = ProjectSettings::new("myShop");
        settings.aws_region = Some("eu-west-1".into());
        settings.aws_notification_email = Some("ops@example.com".into());
        let context = ProjectContext::new(&settings);
        let template = app_templates()
            .iter()
            .find(|t| t.path == path)
            .unwrap_or_else(|| panic!("no template for {path}"));
        context.render(template.body)
    }

    #[test]
    fn template_paths_are_unique() {
        let mut paths: Vec<_> = app_templates().iter().map(|t| t.path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), app_templates().len());
    }

    #[test]
    fn no_placeholder_survives_rendering() {
        let mut settings = ProjectSettings::new("myShop");
        settings.aws_region = Some("eu-west-1".into());
        settings.aws_notification_email = Some("ops@example.com".into());
        let context = ProjectContext::new(&settings);
        for template in app_templates() {
            let out = context.render(template.body);
            assert!(
                !out.contains("{{BASE_NAME") && !out.contains("{{AWS") && !out.contains("{{NOTIFICATION"),
                "unrendered placeholder in {}",
                template.path
            );
        }
    }

    #[test]
    fn shared_schema_carries_all_three_needles() {
        let schema = rendered("data/lib/schema.js");
        assert!(schema.contains(artifacts::NEEDLE_IMPORT));
        assert!(schema.contains(artifacts::NEEDLE_QUERY));
        assert!(schema.contains(artifacts::NEEDLE_MUTATION));
        assert!(schema.contains("name: 'MyShopSchema'"));
    }

    #[test]
    fn project_manifest_carries_both_needles() {
        let manifest = rendered("s-project.json");
        assert!(manifest.contains(artifacts::NEEDLE_POLICY));
        assert!(manifest.contains(artifacts::NEEDLE_TABLE));
        assert!(manifest.contains("\"name\": \"my-shop\""));
    }

    #[test]
    fn serverless_manifest_takes_region_and_email() {
        let manifest = rendered("serverless.json");
        assert!(manifest.contains("\"region\": \"eu-west-1\""));
        assert!(manifest.contains("\"notificationEmail\": \"ops@example.com\""));
    }
}
