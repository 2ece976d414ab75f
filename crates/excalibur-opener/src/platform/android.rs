//! Android dispatch of the folder-view intent.
//!
//! Builds an ACTION_VIEW intent over the external-storage documents URI and
//! hands it to the system chooser, using JNI to call the platform APIs.
//! Needs Android 11 (API 30) or higher for the documents UI entry point.

use jni::JNIEnv;
use jni::objects::{JObject, JValue};

use crate::dispatch::DispatchError;
use crate::locator::DocumentLocator;

const ACTION_VIEW: &str = "android.intent.action.VIEW";
const VIEW_MIME_TYPE: &str = "*/*";
const CHOOSER_TITLE: &str = "Open Folder With";
const FLAG_ACTIVITY_NEW_TASK: i32 = 0x10000000; // Intent.FLAG_ACTIVITY_NEW_TASK
const MIN_SDK: i32 = 30; // Build.VERSION_CODES.R

/// Get the Android SDK version (Build.VERSION.SDK_INT)
fn get_sdk_version(env: &mut JNIEnv) -> Result<i32, jni::errors::Error> {
    let build_version = env.find_class("android/os/Build$VERSION")?;
    let sdk_int = env.get_static_field(build_version, "SDK_INT", "I")?;
    sdk_int.i()
}

/// Build the ACTION_VIEW intent pointed at the folder's content URI.
///
/// The data and MIME type must be set together; setting them separately
/// clears the other.
fn build_view_intent<'local>(
    env: &mut JNIEnv<'local>,
    locator: &DocumentLocator,
) -> Result<JObject<'local>, jni::errors::Error> {
    // new Intent(Intent.ACTION_VIEW)
    let action = env.new_string(ACTION_VIEW)?;
    let intent_class = env.find_class("android/content/Intent")?;
    let intent = env.new_object(
        intent_class,
        "(Ljava/lang/String;)V",
        &[JValue::Object(&action.into())],
    )?;

    // Uri.parse(locator.to_document_uri())
    let uri_string = env.new_string(locator.to_document_uri())?;
    let uri_class = env.find_class("android/net/Uri")?;
    let uri = env.call_static_method(
        uri_class,
        "parse",
        "(Ljava/lang/String;)Landroid/net/Uri;",
        &[JValue::Object(&uri_string.into())],
    )?;

    // intent.setDataAndType(uri, "*/*")
    let mime = env.new_string(VIEW_MIME_TYPE)?;
    env.call_method(
        &intent,
        "setDataAndType",
        "(Landroid/net/Uri;Ljava/lang/String;)Landroid/content/Intent;",
        &[JValue::Object(&uri.l()?), JValue::Object(&mime.into())],
    )?;

    Ok(intent)
}

/// Whether any installed activity resolves the view intent.
fn resolves_to_activity(
    env: &mut JNIEnv,
    context: &JObject,
    intent: &JObject,
) -> Result<bool, jni::errors::Error> {
    // intent.resolveActivity(context.getPackageManager()) != null
    let package_manager = env
        .call_method(
            context,
            "getPackageManager",
            "()Landroid/content/pm/PackageManager;",
            &[],
        )?
        .l()?;

    let component = env
        .call_method(
            intent,
            "resolveActivity",
            "(Landroid/content/pm/PackageManager;)Landroid/content/ComponentName;",
            &[JValue::Object(&package_manager)],
        )?
        .l()?;

    Ok(!component.as_raw().is_null())
}

/// Wrap the view intent in a chooser and launch it.
fn start_chooser(
    env: &mut JNIEnv,
    context: &JObject,
    intent: &JObject,
) -> Result<(), jni::errors::Error> {
    // Intent.createChooser(intent, "Open Folder With")
    let title = env.new_string(CHOOSER_TITLE)?;
    let intent_class = env.find_class("android/content/Intent")?;
    let chooser = env
        .call_static_method(
            intent_class,
            "createChooser",
            "(Landroid/content/Intent;Ljava/lang/CharSequence;)Landroid/content/Intent;",
            &[JValue::Object(intent), JValue::Object(&title.into())],
        )?
        .l()?;

    // Launching from the plugin context rather than an activity
    env.call_method(
        &chooser,
        "addFlags",
        "(I)Landroid/content/Intent;",
        &[JValue::Int(FLAG_ACTIVITY_NEW_TASK)],
    )?;

    // context.startActivity(chooser) — an ActivityNotFoundException thrown
    // here surfaces as a JNI error and is handled by the caller
    env.call_method(
        context,
        "startActivity",
        "(Landroid/content/Intent;)V",
        &[JValue::Object(&chooser)],
    )?;

    Ok(())
}

/// Helper to run JNI operations with proper error handling
fn with_jni<F, T>(f: F) -> Option<T>
where
    F: FnOnce(&mut JNIEnv, JObject) -> Result<T, jni::errors::Error>,
{
    let ctx = ndk_context::android_context();
    let vm = unsafe { jni::JavaVM::from_raw(ctx.vm().cast()) }.ok()?;
    let mut env = vm.attach_current_thread().ok()?;
    let context = unsafe { JObject::from_raw(ctx.context().cast()) };

    match f(&mut env, context) {
        Ok(result) => Some(result),
        Err(e) => {
            log::error!("JNI error: {e}");
            None
        }
    }
}

/// Whether the system has an activity able to view the locator.
pub(super) fn can_resolve_view_intent(locator: &DocumentLocator) -> bool {
    with_jni(|env, context| {
        let sdk_version = get_sdk_version(env)?;
        if sdk_version < MIN_SDK {
            log::warn!("documents view intents need SDK {MIN_SDK}+, running on {sdk_version}");
            return Ok(false);
        }

        let intent = build_view_intent(env, locator)?;
        resolves_to_activity(env, &context, &intent)
    })
    .unwrap_or(false)
}

/// Present the chooser for the locator and launch the user's selection.
pub(super) fn launch_view_chooser(locator: &DocumentLocator) -> Result<(), DispatchError> {
    with_jni(|env, context| {
        let intent = build_view_intent(env, locator)?;
        start_chooser(env, &context, &intent)
    })
    .ok_or_else(|| DispatchError {
        reason: "the system rejected the activity launch".to_string(),
    })
}
