use super::{Pattern, PatternCategory};

pub static PATTERNS: &[Pattern] = &[
    Pattern {
        id: "singleton",
        name: "Singleton",
        category: PatternCategory::Creational,
        summary: "Ensure a class has exactly one instance with a global access point.",
        description: "The class hides its constructor and hands out a single shared \
                      instance, creating it on first use.",
        rationale: "Use it for resources that are genuinely unique in a process, such as a \
                    configuration registry or a connection pool. Prefer passing the instance \
                    explicitly where you can, since hidden globals make testing harder.",
        language: "typescript",
        code: r##"class Config {
  private static instance: Config | null = null;
  private values = new Map<string, string>();

  private constructor() {}

  static getInstance(): Config {
    if (Config.instance === null) {
      Config.instance = new Config();
    }
    return Config.instance;
  }

  get(key: string): string | undefined {
    return this.values.get(key);
  }
}

const a = Config.getInstance();
const b = Config.getInstance();
console.log(a === b); // true
"##,
    },
    Pattern {
        id: "factory-method",
        name: "Factory Method",
        category: PatternCategory::Creational,
        summary: "Let subclasses decide which concrete class to instantiate.",
        description: "A creator declares a method that returns a product. Subclasses \
                      override it to return different concrete products, while the \
                      creator's own logic only talks to the product interface.",
        rationale: "Reach for it when a class cannot anticipate the objects it must create, \
                    or when you want subclasses to plug in their own variants.",
        language: "typescript",
        code: r##"interface Transport {
  deliver(parcel: string): string;
}

class Truck implements Transport {
  deliver(parcel: string): string {
    return `Truck delivers ${parcel} by road`;
  }
}

class Ship implements Transport {
  deliver(parcel: string): string {
    return `Ship delivers ${parcel} by sea`;
  }
}

abstract class Logistics {
  abstract createTransport(): Transport;

  plan(parcel: string): string {
    const transport = this.createTransport();
    return transport.deliver(parcel);
  }
}

class RoadLogistics extends Logistics {
  createTransport(): Transport {
    return new Truck();
  }
}
"##,
    },
    Pattern {
        id: "abstract-factory",
        name: "Abstract Factory",
        category: PatternCategory::Creational,
        summary: "Create families of related objects without naming their classes.",
        description: "A factory interface exposes one creation method per product kind. \
                      Each concrete factory produces a matching family, so products from \
                      different families never mix.",
        rationale: "Useful when the system must work with several interchangeable product \
                    families, such as widgets for different platforms or themes.",
        language: "typescript",
        code: r##"interface Button { render(): string; }
interface Checkbox { render(): string; }

interface WidgetFactory {
  createButton(): Button;
  createCheckbox(): Checkbox;
}

class DarkFactory implements WidgetFactory {
  createButton(): Button {
    return { render: () => "dark button" };
  }
  createCheckbox(): Checkbox {
    return { render: () => "dark checkbox" };
  }
}

function buildForm(factory: WidgetFactory): string[] {
  return [factory.createButton().render(), factory.createCheckbox().render()];
}
"##,
    },
    Pattern {
        id: "builder",
        name: "Builder",
        category: PatternCategory::Creational,
        summary: "Construct complex objects step by step.",
        description: "A builder collects configuration through chained calls and produces \
                      the finished object at the end, keeping constructors small.",
        rationale: "Pick it when an object has many optional parts, or when the same \
                    construction process should yield different representations.",
        language: "typescript",
        code: r##"class Request {
  constructor(
    readonly url: string,
    readonly method: string,
    readonly headers: Record<string, string>,
    readonly timeout: number,
  ) {}
}

class RequestBuilder {
  private method = "GET";
  private headers: Record<string, string> = {};
  private timeout = 30;

  constructor(private url: string) {}

  withMethod(method: string): this {
    this.method = method;
    return this;
  }

  withHeader(name: string, value: string): this {
    this.headers[name] = value;
    return this;
  }

  build(): Request {
    return new Request(this.url, this.method, this.headers, this.timeout);
  }
}

const req = new RequestBuilder("/api/users").withMethod("POST").build();
"##,
    },
    Pattern {
        id: "prototype",
        name: "Prototype",
        category: PatternCategory::Creational,
        summary: "Create new objects by copying an existing instance.",
        description: "Objects expose a clone operation. Callers copy a configured \
                      prototype instead of building from scratch.",
        rationale: "Handy when construction is expensive or when the exact class of the \
                    object to create is only known at run time.",
        language: "typescript",
        code: r##"interface Cloneable<T> {
  clone(): T;
}

class Shape implements Cloneable<Shape> {
  constructor(public x: number, public y: number, public color: string) {}

  clone(): Shape {
    return new Shape(this.x, this.y, this.color);
  }
}

const original = new Shape(10, 20, "red");
const copy = original.clone();
copy.x = 42;
"##,
    },
    Pattern {
        id: "adapter",
        name: "Adapter",
        category: PatternCategory::Structural,
        summary: "Make an incompatible interface fit the one clients expect.",
        description: "The adapter wraps an existing object and translates calls from the \
                      target interface into calls the wrapped object understands.",
        rationale: "Use it to integrate legacy or third-party code without changing either \
                    side of the boundary.",
        language: "typescript",
        code: r##"interface Logger {
  log(message: string): void;
}

class LegacyLogger {
  writeLine(level: number, text: string): void {
    console.log(`[${level}] ${text}`);
  }
}

class LoggerAdapter implements Logger {
  constructor(private legacy: LegacyLogger) {}

  log(message: string): void {
    this.legacy.writeLine(1, message);
  }
}
"##,
    },
    Pattern {
        id: "decorator",
        name: "Decorator",
        category: PatternCategory::Structural,
        summary: "Attach extra behavior to an object by wrapping it.",
        description: "A decorator implements the same interface as the object it wraps, \
                      forwards calls to it, and adds behavior before or after.",
        rationale: "A flexible alternative to subclassing when behaviors should be combined \
                    freely at run time.",
        language: "typescript",
        code: r##"interface DataSource {
  write(data: string): string;
}

class FileSource implements DataSource {
  write(data: string): string {
    return data;
  }
}

class CompressionDecorator implements DataSource {
  constructor(private inner: DataSource) {}

  write(data: string): string {
    /* pretend to compress */
    return this.inner.write(`zip(${data})`);
  }
}

const source = new CompressionDecorator(new FileSource());
"##,
    },
    Pattern {
        id: "facade",
        name: "Facade",
        category: PatternCategory::Structural,
        summary: "Offer one simple interface to a complex subsystem.",
        description: "The facade coordinates several subsystem objects behind a small set \
                      of high-level methods.",
        rationale: "Use it to give clients a narrow entry point and to decouple them from \
                    the subsystem's internals.",
        language: "typescript",
        code: r##"class Decoder { decode(file: string): string { return `frames(${file})`; } }
class AudioMixer { mix(frames: string): string { return `mixed(${frames})`; } }
class Encoder { encode(data: string, format: string): string { return `${format}:${data}`; } }

class VideoConverter {
  private decoder = new Decoder();
  private mixer = new AudioMixer();
  private encoder = new Encoder();

  convert(file: string, format: string): string {
    const frames = this.decoder.decode(file);
    return this.encoder.encode(this.mixer.mix(frames), format);
  }
}
"##,
    },
    Pattern {
        id: "proxy",
        name: "Proxy",
        category: PatternCategory::Structural,
        summary: "Stand in for another object to control access to it.",
        description: "A proxy shares the subject's interface and decides when and whether \
                      to forward requests, adding caching, laziness or access checks.",
        rationale: "Good for lazy initialization, caching of expensive calls, access control \
                    and logging around an existing object.",
        language: "typescript",
        code: r##"interface Api {
  fetch(id: number): Promise<string>;
}

class CachingProxy implements Api {
  private cache = new Map<number, string>();

  constructor(private real: Api) {}

  async fetch(id: number): Promise<string> {
    const hit = this.cache.get(id);
    if (hit !== undefined) {
      return hit;
    }
    const value = await this.real.fetch(id);
    this.cache.set(id, value);
    return value;
  }
}
"##,
    },
    Pattern {
        id: "observer",
        name: "Observer",
        category: PatternCategory::Behavioral,
        summary: "Notify dependents automatically when state changes.",
        description: "A subject keeps a list of subscribers and calls each of them when \
                      something interesting happens.",
        rationale: "Use it when changes to one object must propagate to others without \
                    coupling the subject to concrete listeners.",
        language: "typescript",
        code: r##"type Listener<T> = (value: T) => void;

class Subject<T> {
  private listeners: Listener<T>[] = [];

  subscribe(listener: Listener<T>): () => void {
    this.listeners.push(listener);
    return () => {
      this.listeners = this.listeners.filter((l) => l !== listener);
    };
  }

  emit(value: T): void {
    for (const listener of this.listeners) {
      listener(value);
    }
  }
}

const prices = new Subject<number>();
prices.subscribe((p) => console.log(`price: ${p}`));
prices.emit(100);
"##,
    },
    Pattern {
        id: "strategy",
        name: "Strategy",
        category: PatternCategory::Behavioral,
        summary: "Swap algorithms behind a common interface.",
        description: "Each algorithm lives in its own class. The context holds one and \
                      delegates to it, so the algorithm can change at run time.",
        rationale: "Replaces sprawling conditionals that pick between variants of the same \
                    behavior, and keeps each variant testable on its own.",
        language: "typescript",
        code: r##"interface PricingStrategy {
  price(amount: number): number;
}

class RegularPricing implements PricingStrategy {
  price(amount: number): number {
    return amount;
  }
}

class SalePricing implements PricingStrategy {
  constructor(private percentOff: number) {}

  price(amount: number): number {
    return amount - (amount * this.percentOff) / 100;
  }
}

class Checkout {
  constructor(private strategy: PricingStrategy) {}

  setStrategy(strategy: PricingStrategy): void {
    this.strategy = strategy;
  }

  total(amounts: number[]): number {
    return amounts.reduce((sum, a) => sum + this.strategy.price(a), 0);
  }
}
"##,
    },
    Pattern {
        id: "command",
        name: "Command",
        category: PatternCategory::Behavioral,
        summary: "Turn a request into an object.",
        description: "A command captures an action and its arguments. Invokers run \
                      commands without knowing what they do, which enables queues, \
                      logging and undo.",
        rationale: "Use it for undo/redo, deferred execution, macro recording, or whenever \
                    operations must be passed around as values.",
        language: "typescript",
        code: r##"interface Command {
  execute(): void;
  undo(): void;
}

class Editor {
  text = "";
}

class AppendCommand implements Command {
  constructor(private editor: Editor, private suffix: string) {}

  execute(): void {
    this.editor.text += this.suffix;
  }

  undo(): void {
    this.editor.text = this.editor.text.slice(0, -this.suffix.length);
  }
}

class History {
  private done: Command[] = [];

  run(command: Command): void {
    command.execute();
    this.done.push(command);
  }

  undo(): void {
    this.done.pop()?.undo();
  }
}
"##,
    },
];
