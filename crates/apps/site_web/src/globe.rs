//! Binding from the tour's render commands to a globe.gl instance.
//!
//! Payloads are built as JSON first so their shape can be checked natively,
//! then handed to JS through `JSON.parse`.

use journey::{Arc, CameraTarget, ControlMode, GlobePoint, GlobeRenderer};
use serde_json::{Value, json};
use wasm_bindgen::{JsCast, JsValue};

pub fn points_payload(points: &[GlobePoint]) -> Value {
    Value::Array(
        points
            .iter()
            .map(|p| {
                json!({
                    "id": p.id,
                    "lat": p.position.lat,
                    "lng": p.position.lng,
                    "label": p.label,
                    "color": p.color,
                })
            })
            .collect(),
    )
}

pub fn arcs_payload(arcs: &[Arc]) -> Value {
    Value::Array(
        arcs.iter()
            .map(|a| {
                json!({
                    "startLat": a.start.lat,
                    "startLng": a.start.lng,
                    "endLat": a.end.lat,
                    "endLng": a.end.lng,
                    "color": a.color,
                    "altitude": a.arc_altitude,
                    "intermediatePoints": [{
                        "lat": a.waypoint.lat,
                        "lng": a.waypoint.lng,
                        "altitude": a.waypoint_altitude,
                    }],
                })
            })
            .collect(),
    )
}

pub fn camera_payload(camera: &CameraTarget) -> Value {
    json!({
        "lat": camera.position.lat,
        "lng": camera.position.lng,
        "altitude": camera.altitude,
    })
}

/// Drives a globe.gl instance. Errors from JS are logged, not propagated:
/// a broken globe must not break navigation.
#[derive(Debug, Clone)]
pub struct JsGlobeRenderer {
    globe: JsValue,
}

impl JsGlobeRenderer {
    /// Point the instance's accessors at the payload field names.
    pub fn new(globe: JsValue) -> Result<Self, JsValue> {
        let renderer = Self { globe };
        for (method, field) in [
            ("pointLat", "lat"),
            ("pointLng", "lng"),
            ("pointLabel", "label"),
            ("pointColor", "color"),
            ("labelLat", "lat"),
            ("labelLng", "lng"),
            ("labelText", "label"),
            ("arcColor", "color"),
            ("arcAltitude", "altitude"),
        ] {
            renderer.call(method, &[JsValue::from_str(field)])?;
        }
        Ok(renderer)
    }

    fn call(&self, method: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
        let f: js_sys::Function =
            js_sys::Reflect::get(&self.globe, &JsValue::from_str(method))?.dyn_into()?;
        match args {
            [] => f.call0(&self.globe),
            [a] => f.call1(&self.globe, a),
            [a, b] => f.call2(&self.globe, a, b),
            _ => {
                let list = js_sys::Array::new();
                for arg in args {
                    list.push(arg);
                }
                f.apply(&self.globe, &list)
            }
        }
    }

    fn call_with_json(&self, method: &str, payload: &Value) -> Result<(), JsValue> {
        let data = js_sys::JSON::parse(&payload.to_string())?;
        self.call(method, &[data])?;
        Ok(())
    }

    fn apply_controls(&self, mode: ControlMode) -> Result<(), JsValue> {
        let controls = self.call("controls", &[])?;
        let input = JsValue::from_bool(mode.input_enabled);
        js_sys::Reflect::set(
            &controls,
            &JsValue::from_str("autoRotate"),
            &JsValue::from_bool(mode.auto_rotate),
        )?;
        js_sys::Reflect::set(
            &controls,
            &JsValue::from_str("autoRotateSpeed"),
            &JsValue::from_f64(mode.auto_rotate_speed),
        )?;
        for key in ["enableZoom", "enableRotate", "enablePan"] {
            js_sys::Reflect::set(&controls, &JsValue::from_str(key), &input)?;
        }
        Ok(())
    }
}

fn report(what: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        crate::console_warn(&format!("globe {what} failed: {err:?}"));
    }
}

impl GlobeRenderer for JsGlobeRenderer {
    fn set_visible_points(&mut self, points: &[GlobePoint]) {
        let payload = points_payload(points);
        for method in ["pointsData", "labelsData", "customLayerData"] {
            report(method, self.call_with_json(method, &payload));
        }
    }

    fn set_arcs(&mut self, arcs: &[Arc]) {
        report("arcsData", self.call_with_json("arcsData", &arcs_payload(arcs)));
    }

    fn retarget(&mut self, camera: CameraTarget) {
        let result = js_sys::JSON::parse(&camera_payload(&camera).to_string()).and_then(|pov| {
            self.call(
                "pointOfView",
                &[pov, JsValue::from_f64(f64::from(camera.duration_ms))],
            )
            .map(|_| ())
        });
        report("pointOfView", result);
    }

    fn set_control_mode(&mut self, mode: ControlMode) {
        report("controls", self.apply_controls(mode));
    }
}

#[cfg(test)]
mod tests {
    use content::fallback;
    use journey::{ArcStyle, CameraTarget, GlobePoint, connecting_arcs};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{arcs_payload, camera_payload, points_payload};

    #[test]
    fn points_use_flat_lat_lng() {
        let records = fallback::journey_points();
        let payload = points_payload(&[GlobePoint::from(&records[3])]);
        assert_eq!(
            payload,
            json!([{
                "id": "4",
                "lat": 51.5074,
                "lng": -0.1278,
                "label": "London, UK",
                "color": "#3B82F6",
            }])
        );
    }

    #[test]
    fn arcs_carry_one_intermediate_point() {
        let records = fallback::journey_points();
        let visible: Vec<_> = records.iter().take(2).collect();
        let payload = arcs_payload(&connecting_arcs(&visible, &ArcStyle::default()));
        let arc = &payload[0];
        assert_eq!(arc["altitude"], 0.35);
        assert_eq!(arc["intermediatePoints"].as_array().map(Vec::len), Some(1));
        assert_eq!(arc["intermediatePoints"][0]["altitude"], 0.33);
        assert_eq!(arc["color"], "#3b82f6");
    }

    #[test]
    fn camera_payload_is_point_of_view_shape() {
        let global = fallback::journey_points().remove(5);
        let camera = CameraTarget {
            position: global.coordinates,
            altitude: 2.5,
            duration_ms: 1000,
        };
        assert_eq!(
            camera_payload(&camera),
            json!({ "lat": 0.0, "lng": 0.0, "altitude": 2.5 })
        );
    }
}
